use std::time::Duration;

// relay settings are taken from the build environment, e.g.
// CONTACTFORM_ACCESS_KEY=... trunk build --release
pub const RELAY_ACCESS_KEY: Option<&str> = option_env!("CONTACTFORM_ACCESS_KEY");
pub const RELAY_ENDPOINT: Option<&str> = option_env!("CONTACTFORM_ENDPOINT");

pub const OWNER_EMAIL: Option<&str> = option_env!("CONTACTFORM_OWNER_EMAIL");
pub const OWNER_PHONE: Option<&str> = option_env!("CONTACTFORM_OWNER_PHONE");
pub const FACEBOOK_URL: Option<&str> = option_env!("CONTACTFORM_FACEBOOK_URL");
pub const LINKEDIN_URL: Option<&str> = option_env!("CONTACTFORM_LINKEDIN_URL");
pub const GITHUB_URL: Option<&str> = option_env!("CONTACTFORM_GITHUB_URL");

pub const TOAST_DURATION: Duration = Duration::from_secs(4);
