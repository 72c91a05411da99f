pub mod config;
pub mod draft;
pub mod notification;
pub mod status;
pub mod validate;
