use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ContactFormError {
    ConfigError(String),
    UnknownField(String),
    Json(serde_json::Error),
    Anyhow(anyhow::Error),
    #[cfg(all(feature = "http_client", not(target_arch = "wasm32")))]
    HttpClient(crate::http::client::HttpClientError),
    #[cfg(feature = "web")]
    Js(wasm_bindgen::JsValue),
}

impl fmt::Display for ContactFormError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ContactFormError::ConfigError(s) => {
                write!(f, "Config error: {}", s)
            }
            ContactFormError::UnknownField(s) => {
                write!(f, "Unknown form field: {}", s)
            }
            ContactFormError::Json(e) => write!(f, "Invalid JSON: {}", e),
            ContactFormError::Anyhow(e) => write!(f, "{}", e),
            #[cfg(all(feature = "http_client", not(target_arch = "wasm32")))]
            ContactFormError::HttpClient(e) => write!(f, "{}", e),
            #[cfg(feature = "web")]
            ContactFormError::Js(e) => write!(
                f,
                "JsError: {}",
                e.as_string().unwrap_or_else(|| format!("{:?}", e))
            ),
        }
    }
}

impl Error for ContactFormError {}

impl From<serde_json::Error> for ContactFormError {
    fn from(error: serde_json::Error) -> Self {
        ContactFormError::Json(error)
    }
}

impl From<anyhow::Error> for ContactFormError {
    fn from(error: anyhow::Error) -> Self {
        ContactFormError::Anyhow(error)
    }
}

#[cfg(all(feature = "http_client", not(target_arch = "wasm32")))]
impl From<crate::http::client::HttpClientError> for ContactFormError {
    fn from(error: crate::http::client::HttpClientError) -> Self {
        ContactFormError::HttpClient(error)
    }
}

#[cfg(feature = "web")]
impl From<wasm_bindgen::JsValue> for ContactFormError {
    fn from(error: wasm_bindgen::JsValue) -> Self {
        ContactFormError::Js(error)
    }
}
