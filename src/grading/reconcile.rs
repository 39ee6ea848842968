use tracing::{debug, info, warn};

use super::error::SaveError;
use super::model::{Acknowledgement, DraftEdit, Participant, Severity};
use super::ports::{Notifier, ParticipantSink};

pub const SAVE_OK_TITLE: &str = "Success";
pub const SAVE_OK_MESSAGE: &str = "Participant(s) successfully updated!";
pub const SAVE_ERR_TITLE: &str = "Error";
pub const SAVE_ERR_MESSAGE: &str = "An error occurred while trying to save the Participant(s).";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub applied: usize,
    pub ignored: usize,
}

// A draft GPA of exactly 0 (or NaN) counts as "not entered" and is skipped.
fn gpa_entered(v: f64) -> bool {
    v != 0.0 && !v.is_nan()
}

/// Merge draft edits into `participants` in place. Drafts apply in order, so
/// a later draft for the same id wins. Drafts for unknown ids are dropped.
pub fn reconcile(participants: &mut [Participant], drafts: &[DraftEdit]) -> ReconcileSummary {
    let mut summary = ReconcileSummary::default();

    for draft in drafts {
        let Some(p) = participants.iter_mut().find(|p| p.id == draft.id) else {
            summary.ignored += 1;
            continue;
        };

        if let Some(gpa) = draft.gpa {
            if gpa_entered(gpa) {
                p.gpa = Some(gpa);
            }
        }
        if let Some(passed) = draft.passed {
            p.passed = Some(passed);
        }
        summary.applied += 1;
    }

    debug!(
        applied = summary.applied,
        ignored = summary.ignored,
        "reconciled draft edits"
    );
    summary
}

/// Reconcile, serialize the full list and hand it to the sink. The outcome is
/// reported through `notifier` either way; merged values stay in
/// `participants` even when the save fails.
pub fn commit(
    participants: &mut [Participant],
    drafts: &[DraftEdit],
    sink: &mut dyn ParticipantSink,
    notifier: &mut dyn Notifier,
) -> Result<Acknowledgement, SaveError> {
    reconcile(participants, drafts);

    let outcome = serde_json::to_string(&*participants)
        .map_err(SaveError::from)
        .and_then(|serialized| sink.save(&serialized));

    match outcome {
        Ok(ack) => {
            info!(saved = ack.saved, "participants saved");
            notifier.notify(SAVE_OK_TITLE, SAVE_OK_MESSAGE, Severity::Success);
            Ok(ack)
        }
        Err(e) => {
            warn!(error = %e, "participant save failed");
            notifier.notify(SAVE_ERR_TITLE, SAVE_ERR_MESSAGE, Severity::Error);
            Err(e)
        }
    }
}
