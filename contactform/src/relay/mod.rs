mod payload;
mod submission;
mod transport;

pub use payload::{RelayRequestPayload, RelayResponsePayload};
pub use submission::{Outcome, SubmissionClient};
pub use transport::{RelayReply, RelayTransport};
