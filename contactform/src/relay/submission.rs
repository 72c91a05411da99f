use bytes::Bytes;

use super::payload::{RelayRequestPayload, RelayResponsePayload};
use super::transport::RelayTransport;
use crate::base::notification::{
    Notification, MSG_INCOMPLETE, MSG_REJECTED, MSG_SENT, MSG_TRANSPORT,
};
use crate::{ContactFormError, RelayConfig, SubmissionDraft};

/// Result of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The relay accepted the message.
    Success,
    /// The relay answered, but reported a failure.
    RejectedByServer,
    /// No usable answer: connection, timeout or malformed reply.
    NetworkError,
    /// At least one field was empty, nothing was sent.
    Incomplete,
    /// Another attempt on the same form had not settled yet.
    AlreadyInFlight,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// What to tell the user. `AlreadyInFlight` is silent.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            Outcome::Success => Some(Notification::success(MSG_SENT)),
            Outcome::RejectedByServer => Some(Notification::error(MSG_REJECTED)),
            Outcome::NetworkError => Some(Notification::error(MSG_TRANSPORT)),
            Outcome::Incomplete => Some(Notification::error(MSG_INCOMPLETE)),
            Outcome::AlreadyInFlight => None,
        }
    }
}

pub struct SubmissionClient<T> {
    config: RelayConfig,
    transport: T,
}

#[cfg(all(feature = "http_client", not(target_arch = "wasm32")))]
impl SubmissionClient<crate::http::client::HttpClient> {
    /// Client backed by the native HTTP client, honouring the configured
    /// timeout.
    pub fn from_config(config: RelayConfig) -> Self {
        let mut http_client = crate::http::client::HttpClient::new();
        if let Some(timeout) = config.timeout() {
            http_client = http_client.with_timeout(timeout);
        }
        SubmissionClient::new(config, http_client)
    }
}

impl<T: RelayTransport> SubmissionClient<T> {
    pub fn new(config: RelayConfig, transport: T) -> Self {
        SubmissionClient { config, transport }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send the draft to the relay once and classify the reply. The draft
    /// is expected to have passed validation already.
    pub async fn send(&self, draft: &SubmissionDraft) -> Outcome {
        match self.relay(draft).await {
            Ok(true) => Outcome::Success,
            Ok(false) => {
                log::warn!(
                    "relay at {} rejected the submission",
                    self.config.endpoint()
                );
                Outcome::RejectedByServer
            }
            Err(e) => {
                log::error!("relay submission failed: {}", e);
                Outcome::NetworkError
            }
        }
    }

    async fn relay(
        &self,
        draft: &SubmissionDraft,
    ) -> Result<bool, ContactFormError> {
        let payload =
            RelayRequestPayload::new(self.config.access_key(), draft).to_json()?;
        let reply = self
            .transport
            .post_json(self.config.endpoint(), Bytes::from(payload))
            .await?;
        log::debug!("relay replied with status {}", reply.status_code());
        let response = RelayResponsePayload::from_slice(reply.body())?;
        Ok(response.is_success())
    }
}
