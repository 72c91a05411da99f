mod contact_icons;
mod social_icons;

pub use contact_icons::{MailIcon, PhoneIcon, SendIcon};
pub use social_icons::{FacebookIcon, GithubIcon, LinkedinIcon};
