use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{Field, SubmissionDraft, SubmissionStatus};

/// Holder of a form's draft and in-flight flag.
///
/// Methods take `&self`; implementations use whatever interior mutability
/// their environment offers (a mutex natively, reactive signals in the
/// browser).
pub trait FormStore {
    fn draft(&self) -> SubmissionDraft;
    fn set_field(&self, field: Field, value: String);
    fn reset_draft(&self);
    fn status(&self) -> SubmissionStatus;
    /// Move from `Idle` to `InFlight`. Returns false, and changes nothing,
    /// if a submission is already in flight.
    fn try_begin(&self) -> bool;
    /// Back to `Idle`.
    fn finish(&self);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub draft: SubmissionDraft,
    pub status: SubmissionStatus,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<FormState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draft(draft: SubmissionDraft) -> Self {
        MemoryStore {
            state: Arc::new(Mutex::new(FormState {
                draft,
                status: SubmissionStatus::Idle,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        // state is always left consistent, a poisoned lock is still usable
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FormStore for MemoryStore {
    fn draft(&self) -> SubmissionDraft {
        self.lock().draft.clone()
    }

    fn set_field(&self, field: Field, value: String) {
        self.lock().draft.set_field(field, value);
    }

    fn reset_draft(&self) {
        self.lock().draft = SubmissionDraft::default();
    }

    fn status(&self) -> SubmissionStatus {
        self.lock().status
    }

    fn try_begin(&self) -> bool {
        let mut state = self.lock();
        if state.status.is_in_flight() {
            return false;
        }
        state.status = SubmissionStatus::InFlight;
        true
    }

    fn finish(&self) {
        self.lock().status = SubmissionStatus::Idle;
    }
}
