use serde::{Deserialize, Serialize};

/// One row of the grading table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(rename = "participantId")]
    pub id: String,
    #[serde(rename = "participantName", default)]
    pub name: String,
    #[serde(rename = "participantEmail", default)]
    pub email: String,
    #[serde(rename = "participantStatus", default)]
    pub status: String,
    #[serde(rename = "participantGPA", default)]
    pub gpa: Option<f64>,
    #[serde(rename = "participantPassed", default)]
    pub passed: Option<bool>,
}

/// Participant as sent by the "add row" event. The id is optional and
/// filled with a fresh v4 UUID when missing.
#[derive(Debug, Clone, Deserialize)]
pub struct NewParticipant {
    #[serde(rename = "participantId", default)]
    pub id: Option<String>,
    #[serde(rename = "participantName", default)]
    pub name: String,
    #[serde(rename = "participantEmail", default)]
    pub email: String,
    #[serde(rename = "participantStatus", default)]
    pub status: String,
    #[serde(rename = "participantGPA", default)]
    pub gpa: Option<f64>,
    #[serde(rename = "participantPassed", default)]
    pub passed: Option<bool>,
}

impl NewParticipant {
    pub fn into_participant(self) -> Participant {
        let id = self
            .id
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        Participant {
            id,
            name: self.name,
            email: self.email,
            status: self.status,
            gpa: self.gpa,
            passed: self.passed,
        }
    }
}

/// Partial update from the inline editor. `None` means the user did not
/// touch the field. Display-only fields are not part of the type, so a
/// draft carrying them has them dropped at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftEdit {
    #[serde(rename = "participantId")]
    pub id: String,
    #[serde(
        rename = "participantGPA",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub gpa: Option<f64>,
    #[serde(
        rename = "participantPassed",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub passed: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Acknowledgement {
    pub saved: usize,
    pub saved_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub variant: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Text,
    Email,
    Number,
    Boolean,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub label: &'static str,
    pub field_name: &'static str,
    #[serde(rename = "type")]
    pub kind: ColumnType,
    pub editable: bool,
}

pub const COLUMNS: [Column; 5] = [
    Column {
        label: "Name",
        field_name: "participantName",
        kind: ColumnType::Text,
        editable: false,
    },
    Column {
        label: "Email",
        field_name: "participantEmail",
        kind: ColumnType::Email,
        editable: false,
    },
    Column {
        label: "Status",
        field_name: "participantStatus",
        kind: ColumnType::Text,
        editable: false,
    },
    Column {
        label: "GPA",
        field_name: "participantGPA",
        kind: ColumnType::Number,
        editable: true,
    },
    Column {
        label: "Passed",
        field_name: "participantPassed",
        kind: ColumnType::Boolean,
        editable: true,
    },
];
