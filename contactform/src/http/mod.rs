#[cfg(all(feature = "http_client", not(target_arch = "wasm32")))]
pub mod client;

#[cfg(feature = "web")]
pub mod fetch;
