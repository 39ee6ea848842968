use super::error::{FetchError, SaveError};
use super::model::{Acknowledgement, Participant, Severity, Toast};
use super::ports::{Notifier, ParticipantSink, ParticipantSource};

pub fn participant(id: &str, gpa: Option<f64>, passed: Option<bool>) -> Participant {
    Participant {
        id: id.to_string(),
        name: format!("Student {id}"),
        email: format!("student{id}@example.org"),
        status: "Enrolled".to_string(),
        gpa,
        passed,
    }
}

pub struct FixedSource(pub Result<Vec<Participant>, String>);

impl ParticipantSource for FixedSource {
    fn fetch(&self, _parent_id: &str) -> Result<Vec<Participant>, FetchError> {
        self.0.clone().map_err(FetchError::Database)
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub saved: Vec<String>,
    pub fail: bool,
}

impl RecordingSink {
    pub fn failing() -> Self {
        Self {
            saved: Vec::new(),
            fail: true,
        }
    }
}

impl ParticipantSink for RecordingSink {
    fn save(&mut self, serialized_participants: &str) -> Result<Acknowledgement, SaveError> {
        self.saved.push(serialized_participants.to_string());
        if self.fail {
            return Err(SaveError::Database("connection reset".into()));
        }
        let rows: Vec<Participant> = serde_json::from_str(serialized_participants)?;
        Ok(Acknowledgement {
            saved: rows.len(),
            saved_at: "2026-01-01T00:00:00Z".into(),
        })
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub toasts: Vec<Toast>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, title: &str, message: &str, severity: Severity) {
        self.toasts.push(Toast {
            title: title.to_string(),
            message: message.to_string(),
            variant: severity,
        });
    }
}
