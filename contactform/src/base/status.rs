/// Whether a submission request is currently outstanding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    InFlight,
}

impl SubmissionStatus {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionStatus::InFlight)
    }
}
