pub(crate) mod base;
pub(crate) mod error;
pub(crate) mod form;
pub(crate) mod http;
pub(crate) mod relay;

pub use base::config::{EnvironmentConfig, RelayConfig, DEFAULT_ENDPOINT};
pub use base::draft::{Field, InputKind, SubmissionDraft};
pub use base::notification::{
    LogNotifier, Notification, NotificationKind, Notifier,
};
pub use base::status::SubmissionStatus;
pub use base::validate::is_submittable;
pub use error::ContactFormError;
pub use form::{ContactForm, FormState, FormStore, MemoryStore};
pub use relay::{
    Outcome, RelayReply, RelayRequestPayload, RelayResponsePayload,
    RelayTransport, SubmissionClient,
};

// transports, picked per target
pub mod external {
    #[cfg(all(feature = "http_client", not(target_arch = "wasm32")))]
    pub use crate::http::client::{
        HttpClient, HttpClientError, HttpClientResponse, HttpClientResult,
    };
    #[cfg(feature = "web")]
    pub use crate::http::fetch::FetchTransport;
}
pub use external::*;
