use tracing::{info, warn};

use super::error::SaveError;
use super::model::{Acknowledgement, DraftEdit, Participant};
use super::ports::{Notifier, ParticipantSink, ParticipantSource};
use super::reconcile;

/// State of one mounted grading table. Created when the table opens and
/// dropped when it closes.
#[derive(Debug, Clone)]
pub struct GradingTable {
    parent_id: String,
    participants: Vec<Participant>,
    draft_values: Vec<DraftEdit>,
    error: Option<String>,
}

impl GradingTable {
    pub fn new(parent_id: impl Into<String>) -> Self {
        Self {
            parent_id: parent_id.into(),
            participants: Vec::new(),
            draft_values: Vec::new(),
            error: None,
        }
    }

    pub fn parent_id(&self) -> &str {
        &self.parent_id
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn draft_values(&self) -> &[DraftEdit] {
        &self.draft_values
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replace the list with what the source returns. A failed fetch is
    /// recorded and logged; the current list is kept and nobody is notified.
    pub fn load(&mut self, source: &dyn ParticipantSource) {
        match source.fetch(&self.parent_id) {
            Ok(rows) => {
                info!(parent_id = %self.parent_id, count = rows.len(), "participants loaded");
                self.participants = rows;
                self.error = None;
            }
            Err(e) => {
                warn!(parent_id = %self.parent_id, error = %e, "participant fetch failed");
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn stage_drafts(&mut self, drafts: Vec<DraftEdit>) {
        self.draft_values = drafts;
    }

    /// Commit pending edits. When `drafts` is given it replaces the staged
    /// buffer. The buffer is emptied before the sink is called.
    pub fn commit(
        &mut self,
        drafts: Option<Vec<DraftEdit>>,
        sink: &mut dyn ParticipantSink,
        notifier: &mut dyn Notifier,
    ) -> Result<Acknowledgement, SaveError> {
        if let Some(d) = drafts {
            self.draft_values = d;
        }
        let pending = std::mem::take(&mut self.draft_values);

        let res = reconcile::commit(&mut self.participants, &pending, sink, notifier);
        if let Err(e) = &res {
            self.error = Some(e.to_string());
        }
        res
    }

    /// Append a row directly, bypassing the draft path. Returns false when the
    /// id is already present.
    pub fn add_participant(&mut self, participant: Participant) -> bool {
        if self.participants.iter().any(|p| p.id == participant.id) {
            return false;
        }
        self.participants.push(participant);
        true
    }
}
