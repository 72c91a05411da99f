use async_trait::async_trait;
use bytes::Bytes;
use js_sys::{ArrayBuffer, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::relay::{RelayReply, RelayTransport};
use crate::ContactFormError;

/// Relay transport on top of the browser `fetch` API.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl FetchTransport {
    pub fn new() -> Self {
        FetchTransport
    }
}

#[async_trait(?Send)]
impl RelayTransport for FetchTransport {
    async fn post_json(
        &self,
        url: &str,
        body: Bytes,
    ) -> Result<RelayReply, ContactFormError> {
        log::debug!("POST {}", url);
        let window = web_sys::window().ok_or_else(|| {
            ContactFormError::ConfigError("No window available".to_string())
        })?;

        let mut request_init = RequestInit::new();
        request_init.method("POST");
        request_init.mode(RequestMode::Cors);

        let headers_map = Headers::new()?;
        headers_map.set("Content-Type", "application/json")?;
        headers_map.set("Accept", "application/json")?;
        request_init.headers(&headers_map);

        let body = String::from_utf8_lossy(&body);
        request_init.body(Some(&JsValue::from_str(&body)));

        let request = Request::new_with_str_and_init(url, &request_init)?;
        let response_js =
            JsFuture::from(window.fetch_with_request(&request)).await?;
        let response: Response = response_js.dyn_into()?;

        let status = response.status();
        let body_js = JsFuture::from(response.array_buffer()?).await?;
        let buffer: ArrayBuffer = body_js.dyn_into()?;
        let body_bytes = Uint8Array::new(&buffer).to_vec();

        Ok(RelayReply::new(status, body_bytes.into()))
    }
}
