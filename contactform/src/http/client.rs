use std::convert::Infallible;
use std::fmt;
use std::time::Duration;

use anyhow::anyhow;
use bytes::{Bytes, BytesMut};
use http_body_util::combinators::BoxBody;
use http_body_util::{BodyExt, Full};
use hyper::header::{ACCEPT, CONTENT_TYPE};
use hyper::{Method, Request, Uri};
use hyper_tls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use tokio::time::timeout;

type RequestBody = BoxBody<Bytes, Infallible>;

/// Status and fully collected body of one exchange.
#[derive(Debug)]
pub struct HttpClientResponse {
    status_code: u16,
    body: Bytes,
}

impl HttpClientResponse {
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn into_body(self) -> Bytes {
        self.body
    }
}

#[derive(Debug, Clone)]
pub enum HttpClientError {
    ConnectionError(String),
    Timeout,
    Other(String),
}

impl fmt::Display for HttpClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpClientError::ConnectionError(e) => {
                write!(f, "ConnectionError: {}", e)
            }
            HttpClientError::Timeout => write!(f, "Timeout"),
            HttpClientError::Other(e) => write!(f, "Other: {}", e),
        }
    }
}

impl From<hyper::http::Error> for HttpClientError {
    fn from(err: hyper::http::Error) -> Self {
        HttpClientError::Other(err.to_string())
    }
}

impl From<anyhow::Error> for HttpClientError {
    fn from(err: anyhow::Error) -> Self {
        HttpClientError::Other(err.to_string())
    }
}

pub type HttpClientResult = Result<HttpClientResponse, HttpClientError>;

/// JSON-over-HTTPS client for the relay. Replies of every status are
/// handed back; only a missing reply is an error.
#[derive(Clone)]
pub struct HttpClient {
    client: Client<HttpsConnector<HttpConnector>, RequestBody>,
    timeout: Option<Duration>,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    pub fn new() -> Self {
        let client = Client::builder(TokioExecutor::new())
            .build::<_, RequestBody>(HttpsConnector::new());
        HttpClient {
            client,
            timeout: None,
        }
    }

    /// Bound the whole exchange, connect through last body frame.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub async fn post(&self, url: &str, body: Bytes) -> HttpClientResult {
        log::debug!("POST {}", url);
        let uri = url
            .parse::<Uri>()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(BoxBody::new(Full::new(body)))?;

        match self.timeout {
            Some(limit) => timeout(limit, self.exchange(url, request))
                .await
                .map_err(|_| HttpClientError::Timeout)?,
            None => self.exchange(url, request).await,
        }
    }

    async fn exchange(
        &self,
        url: &str,
        request: Request<RequestBody>,
    ) -> HttpClientResult {
        let mut response = self.client.request(request).await.map_err(|e| {
            log::debug!("connection to {} failed: {}", url, e);
            HttpClientError::ConnectionError(url.to_string())
        })?;
        let status_code = response.status().as_u16();

        let mut body = BytesMut::new();
        while let Some(next) = response.frame().await {
            let frame = next.map_err(|e| anyhow!(e))?;
            if let Some(chunk) = frame.data_ref() {
                body.extend_from_slice(chunk);
            }
        }

        Ok(HttpClientResponse {
            status_code,
            body: body.freeze(),
        })
    }
}
