mod contact_details;
mod contact_section;
mod toast;

pub mod buttons;
pub mod forms;
pub mod icons;

pub use contact_details::{ContactDetails, ContactDetailsView};
pub use contact_section::ContactSection;
pub use toast::ToastView;
