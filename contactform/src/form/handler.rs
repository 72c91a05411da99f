use super::store::FormStore;
use crate::relay::{Outcome, RelayTransport, SubmissionClient};
use crate::{
    is_submittable, ContactFormError, Field, Notifier, SubmissionDraft,
    SubmissionStatus,
};

/// Holds the form in flight while alive, releases it on drop.
struct InFlightGuard<'a, S: FormStore> {
    store: &'a S,
}

impl<'a, S: FormStore> InFlightGuard<'a, S> {
    fn acquire(store: &'a S) -> Option<Self> {
        store.try_begin().then_some(InFlightGuard { store })
    }
}

impl<S: FormStore> Drop for InFlightGuard<'_, S> {
    fn drop(&mut self) {
        self.store.finish();
    }
}

/// One contact form instance: its state, the relay client and the
/// notification surface.
pub struct ContactForm<S, T, N> {
    store: S,
    client: SubmissionClient<T>,
    notifier: N,
}

impl<S, T, N> ContactForm<S, T, N>
where
    S: FormStore,
    T: RelayTransport,
    N: Notifier,
{
    pub fn new(store: S, client: SubmissionClient<T>, notifier: N) -> Self {
        ContactForm {
            store,
            client,
            notifier,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn client(&self) -> &SubmissionClient<T> {
        &self.client
    }

    pub fn draft(&self) -> SubmissionDraft {
        self.store.draft()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.store.status()
    }

    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        self.store.set_field(field, value.into());
    }

    pub fn set_field_by_name(
        &self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), ContactFormError> {
        let field = name.parse::<Field>()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Validate and relay the current draft.
    ///
    /// Every failure ends here as an `Outcome` plus a notification. The
    /// draft is cleared only on `Success`, and the form is back to `Idle`
    /// once this returns, whatever the outcome.
    pub async fn submit(&self) -> Outcome {
        if self.store.status().is_in_flight() {
            log::debug!("submission ignored, another one is in flight");
            return Outcome::AlreadyInFlight;
        }

        let draft = self.store.draft();
        if !is_submittable(&draft) {
            self.announce(Outcome::Incomplete);
            return Outcome::Incomplete;
        }

        let Some(_in_flight) = InFlightGuard::acquire(&self.store) else {
            return Outcome::AlreadyInFlight;
        };

        let outcome = self.client.send(&draft).await;
        self.announce(outcome);
        if outcome.is_success() {
            self.store.reset_draft();
        }
        outcome
    }

    fn announce(&self, outcome: Outcome) {
        if let Some(notification) = outcome.notification() {
            self.notifier.notify(notification);
        }
    }
}
