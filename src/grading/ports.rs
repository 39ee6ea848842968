//! Capabilities the grading table talks to. Calls run to completion on the
//! request loop; none of them retry.

use super::error::{FetchError, SaveError};
use super::model::{Acknowledgement, Participant, Severity};

pub trait ParticipantSource {
    fn fetch(&self, parent_id: &str) -> Result<Vec<Participant>, FetchError>;
}

pub trait ParticipantSink {
    /// Persist the full participant list. `serialized_participants` is the
    /// JSON array of every row, not a diff.
    fn save(&mut self, serialized_participants: &str) -> Result<Acknowledgement, SaveError>;
}

pub trait Notifier {
    fn notify(&mut self, title: &str, message: &str, severity: Severity);
}
