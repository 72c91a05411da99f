use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use contactform::{
    ContactForm, ContactFormError, Field, FormStore, MemoryStore,
    Notification, NotificationKind, Outcome, RelayConfig, RelayReply,
    RelayTransport, SubmissionClient, SubmissionDraft, SubmissionStatus,
};
use tokio::sync::Notify;

enum Reply {
    Json(u16, &'static str),
    Unreachable,
}

struct MockTransport {
    reply: Reply,
    calls: AtomicUsize,
    last_body: Mutex<Option<Bytes>>,
    // when set, every call waits for a permit before replying
    gate: Option<Arc<Notify>>,
}

impl MockTransport {
    fn replying(reply: Reply) -> Self {
        MockTransport {
            reply,
            calls: AtomicUsize::new(0),
            last_body: Mutex::new(None),
            gate: None,
        }
    }

    fn gated(reply: Reply, gate: Arc<Notify>) -> Self {
        MockTransport {
            gate: Some(gate),
            ..MockTransport::replying(reply)
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait(?Send)]
impl RelayTransport for MockTransport {
    async fn post_json(
        &self,
        _url: &str,
        body: Bytes,
    ) -> Result<RelayReply, ContactFormError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_body.lock().unwrap() = Some(body);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match self.reply {
            Reply::Json(status, body) => {
                Ok(RelayReply::new(status, Bytes::from_static(body.as_bytes())))
            }
            Reply::Unreachable => Err(ContactFormError::ConfigError(
                "connection refused".to_string(),
            )),
        }
    }
}

/// Memory store that records every status it moves to.
#[derive(Default)]
struct RecordingStore {
    inner: MemoryStore,
    transitions: Mutex<Vec<SubmissionStatus>>,
}

impl RecordingStore {
    fn with_draft(draft: SubmissionDraft) -> Self {
        RecordingStore {
            inner: MemoryStore::with_draft(draft),
            transitions: Mutex::new(Vec::new()),
        }
    }

    fn transitions(&self) -> Vec<SubmissionStatus> {
        self.transitions.lock().unwrap().clone()
    }
}

impl FormStore for RecordingStore {
    fn draft(&self) -> SubmissionDraft {
        self.inner.draft()
    }

    fn set_field(&self, field: Field, value: String) {
        self.inner.set_field(field, value)
    }

    fn reset_draft(&self) {
        self.inner.reset_draft()
    }

    fn status(&self) -> SubmissionStatus {
        self.inner.status()
    }

    fn try_begin(&self) -> bool {
        let admitted = self.inner.try_begin();
        if admitted {
            self.transitions
                .lock()
                .unwrap()
                .push(SubmissionStatus::InFlight);
        }
        admitted
    }

    fn finish(&self) {
        self.inner.finish();
        self.transitions.lock().unwrap().push(SubmissionStatus::Idle);
    }
}

type Inbox = Arc<Mutex<Vec<Notification>>>;

fn inbox_notifier(inbox: &Inbox) -> impl Fn(Notification) {
    let inbox = Arc::clone(inbox);
    move |notification| inbox.lock().unwrap().push(notification)
}

fn ana() -> SubmissionDraft {
    SubmissionDraft::new("Ana", "ana@x.com", "Hi")
}

fn relay_config() -> RelayConfig {
    RelayConfig::new("test-access-key").unwrap()
}

fn build_form(
    draft: SubmissionDraft,
    transport: MockTransport,
) -> (
    ContactForm<RecordingStore, MockTransport, impl Fn(Notification)>,
    Inbox,
) {
    let inbox: Inbox = Arc::default();
    let form = ContactForm::new(
        RecordingStore::with_draft(draft),
        SubmissionClient::new(relay_config(), transport),
        inbox_notifier(&inbox),
    );
    (form, inbox)
}

#[tokio::test]
async fn test_success_resets_draft() {
    let transport = MockTransport::replying(Reply::Json(200, r#"{"success":true}"#));
    let (form, inbox) = build_form(ana(), transport);

    let outcome = form.submit().await;

    assert_eq!(outcome, Outcome::Success);
    assert_eq!(form.draft(), SubmissionDraft::default());
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert_eq!(form.client().transport().calls(), 1);

    let inbox = inbox.lock().unwrap();
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].kind(), NotificationKind::Success);
    assert_eq!(inbox[0].message(), "Your message has been sent successfully!");
}

#[tokio::test]
async fn test_request_body_carries_key_and_fields() {
    let transport = MockTransport::replying(Reply::Json(200, r#"{"success":true}"#));
    let (form, _inbox) = build_form(ana(), transport);

    form.submit().await;

    let body = form.client().transport().last_body.lock().unwrap().clone();
    let json: serde_json::Value = serde_json::from_slice(&body.unwrap()).unwrap();
    assert_eq!(json["access_key"], "test-access-key");
    assert_eq!(json["name"], "Ana");
    assert_eq!(json["email"], "ana@x.com");
    assert_eq!(json["message"], "Hi");
}

#[tokio::test]
async fn test_server_rejection_keeps_draft() {
    let transport = MockTransport::replying(Reply::Json(200, r#"{"success":false}"#));
    let (form, inbox) = build_form(ana(), transport);

    let outcome = form.submit().await;

    assert_eq!(outcome, Outcome::RejectedByServer);
    assert_eq!(form.draft(), ana());
    assert_eq!(form.status(), SubmissionStatus::Idle);

    let inbox = inbox.lock().unwrap();
    assert_eq!(inbox.len(), 1);
    assert!(inbox[0].is_error());
    assert_eq!(inbox[0].message(), "Sorry, failed to send your message.");
}

#[tokio::test]
async fn test_error_status_with_json_is_a_rejection() {
    let transport = MockTransport::replying(Reply::Json(
        400,
        r#"{"success":false,"message":"Invalid access key"}"#,
    ));
    let (form, _inbox) = build_form(ana(), transport);

    assert_eq!(form.submit().await, Outcome::RejectedByServer);
    assert_eq!(form.draft(), ana());
}

#[tokio::test]
async fn test_transport_error_keeps_draft() {
    let transport = MockTransport::replying(Reply::Unreachable);
    let (form, inbox) = build_form(ana(), transport);

    let outcome = form.submit().await;

    assert_eq!(outcome, Outcome::NetworkError);
    assert_eq!(form.draft(), ana());
    assert_eq!(form.status(), SubmissionStatus::Idle);

    let inbox = inbox.lock().unwrap();
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].message(), "Something went wrong. Try again later.");
}

#[tokio::test]
async fn test_malformed_reply_is_a_transport_error() {
    let transport = MockTransport::replying(Reply::Json(502, "<html>Bad Gateway</html>"));
    let (form, _inbox) = build_form(ana(), transport);

    assert_eq!(form.submit().await, Outcome::NetworkError);
    assert_eq!(form.draft(), ana());
}

#[tokio::test]
async fn test_incomplete_draft_sends_nothing() {
    for field in [Field::Name, Field::Email, Field::Message] {
        let mut draft = ana();
        draft.set_field(field, String::new());
        let transport = MockTransport::replying(Reply::Json(200, r#"{"success":true}"#));
        let (form, inbox) = build_form(draft.clone(), transport);

        let outcome = form.submit().await;

        assert_eq!(outcome, Outcome::Incomplete);
        assert_eq!(form.client().transport().calls(), 0);
        assert_eq!(form.draft(), draft);
        assert!(form.store().transitions().is_empty());

        let inbox = inbox.lock().unwrap();
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0].message(), "Please fill in all fields.");
    }
}

#[tokio::test]
async fn test_status_round_trip_for_every_outcome() {
    let replies = [
        Reply::Json(200, r#"{"success":true}"#),
        Reply::Json(200, r#"{"success":false}"#),
        Reply::Unreachable,
    ];
    for reply in replies {
        let (form, _inbox) = build_form(ana(), MockTransport::replying(reply));
        form.submit().await;
        assert_eq!(
            form.store().transitions(),
            vec![SubmissionStatus::InFlight, SubmissionStatus::Idle]
        );
    }
}

#[tokio::test]
async fn test_second_submit_while_pending_is_ignored() {
    let gate = Arc::new(Notify::new());
    let transport = MockTransport::gated(
        Reply::Json(200, r#"{"success":true}"#),
        Arc::clone(&gate),
    );
    let (form, inbox) = build_form(ana(), transport);

    let (first, second, _) = tokio::join!(form.submit(), form.submit(), async {
        gate.notify_one();
    });

    assert_eq!(first, Outcome::Success);
    assert_eq!(second, Outcome::AlreadyInFlight);
    assert_eq!(form.client().transport().calls(), 1);
    assert_eq!(inbox.lock().unwrap().len(), 1);
    assert_eq!(form.status(), SubmissionStatus::Idle);
}

#[tokio::test]
async fn test_failed_attempt_can_be_resubmitted() {
    let (form, inbox) = build_form(ana(), MockTransport::replying(Reply::Unreachable));

    assert_eq!(form.submit().await, Outcome::NetworkError);
    assert_eq!(form.submit().await, Outcome::NetworkError);

    assert_eq!(form.client().transport().calls(), 2);
    assert_eq!(inbox.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_field_updates_through_form() {
    let transport = MockTransport::replying(Reply::Json(200, r#"{"success":true}"#));
    let (form, _inbox) = build_form(SubmissionDraft::default(), transport);

    form.set_field(Field::Name, "Ana");
    form.set_field_by_name("email", "ana@x.com").unwrap();
    form.set_field_by_name("message", "Hi").unwrap();
    assert!(form.set_field_by_name("subject", "Hello").is_err());

    assert_eq!(form.draft(), ana());
    assert_eq!(form.submit().await, Outcome::Success);
}
