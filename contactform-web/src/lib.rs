pub(crate) mod base;
pub(crate) mod components;
pub(crate) mod vars;

pub mod app;

pub use base::state::{SignalStore, Toast, ToastNotifier};
pub use components::ContactSection;
