mod contact_form;
mod form_field;

pub use contact_form::{ContactFormView, WebContactForm};
pub use form_field::FormFieldView;
