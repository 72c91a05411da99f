use contactform::{
    Field, FormStore, Notification, Notifier, SubmissionDraft,
    SubmissionStatus,
};
use leptos::*;

/// Form state kept in reactive signals, so the view follows every change.
#[derive(Clone, Copy)]
pub struct SignalStore {
    draft: RwSignal<SubmissionDraft>,
    status: RwSignal<SubmissionStatus>,
}

impl Default for SignalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalStore {
    pub fn new() -> Self {
        Self {
            draft: create_rw_signal(SubmissionDraft::default()),
            status: create_rw_signal(SubmissionStatus::Idle),
        }
    }

    pub fn field_value(&self, field: Field) -> Signal<String> {
        let draft = self.draft;
        Signal::derive(move || draft.with(|d| d.get(field).to_string()))
    }

    pub fn is_submitting(&self) -> Signal<bool> {
        let status = self.status;
        Signal::derive(move || status.get().is_in_flight())
    }
}

impl FormStore for SignalStore {
    fn draft(&self) -> SubmissionDraft {
        self.draft.get_untracked()
    }

    fn set_field(&self, field: Field, value: String) {
        self.draft.update(|draft| draft.set_field(field, value));
    }

    fn reset_draft(&self) {
        self.draft.set(SubmissionDraft::default());
    }

    fn status(&self) -> SubmissionStatus {
        self.status.get_untracked()
    }

    fn try_begin(&self) -> bool {
        if self.status.get_untracked().is_in_flight() {
            return false;
        }
        self.status.set(SubmissionStatus::InFlight);
        true
    }

    fn finish(&self) {
        self.status.set(SubmissionStatus::Idle);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Shows the most recent notification, replacing any toast still visible.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toast: RwSignal<Option<Toast>>,
}

impl Default for ToastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastNotifier {
    pub fn new() -> Self {
        Self {
            toast: create_rw_signal(None),
        }
    }

    pub fn toast(&self) -> RwSignal<Option<Toast>> {
        self.toast
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        self.toast.update(|toast| {
            let id = toast.as_ref().map_or(0, |t| t.id + 1);
            *toast = Some(Toast { id, notification });
        });
    }
}
