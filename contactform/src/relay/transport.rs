use async_trait::async_trait;
use bytes::Bytes;

use crate::ContactFormError;

/// Status and complete body of a relay reply.
#[derive(Debug, Clone)]
pub struct RelayReply {
    status_code: u16,
    body: Bytes,
}

impl RelayReply {
    pub fn new(status_code: u16, body: Bytes) -> Self {
        RelayReply { status_code, body }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }
}

/// Sends one JSON document to the relay and hands back whatever came back,
/// regardless of HTTP status. Only failures to get a reply at all are
/// errors.
///
/// Futures are not required to be `Send`: the browser transport holds JS
/// values across awaits, and a form only ever runs on one task.
#[async_trait(?Send)]
pub trait RelayTransport {
    async fn post_json(
        &self,
        url: &str,
        body: Bytes,
    ) -> Result<RelayReply, ContactFormError>;
}

#[cfg(all(feature = "http_client", not(target_arch = "wasm32")))]
mod http_client {
    use super::*;
    use crate::http::client::HttpClient;

    #[async_trait(?Send)]
    impl RelayTransport for HttpClient {
        async fn post_json(
            &self,
            url: &str,
            body: Bytes,
        ) -> Result<RelayReply, ContactFormError> {
            let response = self.post(url, body).await?;
            Ok(RelayReply::new(response.status_code(), response.into_body()))
        }
    }
}
