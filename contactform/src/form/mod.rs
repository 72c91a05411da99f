mod handler;
mod store;

pub use handler::ContactForm;
pub use store::{FormState, FormStore, MemoryStore};
