//! Enrollment records.
//!
//! A [`Student`] carries its answers as a dynamic map keyed by form-field
//! `name`, so admin edits to the form configuration never invalidate
//! past registrations; there is deliberately no referential integrity
//! between answers and field definitions.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Repository-assigned identifier. Sequential per collection.
pub type RecordId = i32;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// A registered student.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: RecordId,
    pub status: EnrollmentStatus,
    pub registration_date: DateTime<Utc>,
    /// Submitted answers, keyed by form-field `name`.
    #[serde(flatten)]
    pub values: HashMap<String, Value>,
}

/// Create/update payload for a student. On update, `values` merges onto
/// the stored map and `status` replaces the stored status when present.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct StudentDraft {
    #[serde(default)]
    pub status: Option<EnrollmentStatus>,
    #[serde(flatten)]
    pub values: HashMap<String, Value>,
}

/// One uploaded file, tied to a student and an upload slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    pub id: RecordId,
    pub student_id: RecordId,
    /// Upload slot key: the document requirement's `name`.
    pub requirement: String,
    pub file_name: String,
    /// Base64-encoded payload, stored as received.
    pub file_data: String,
    pub mime_type: String,
    pub upload_date: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DocumentDraft {
    pub student_id: RecordId,
    pub requirement: String,
    pub file_name: String,
    pub file_data: String,
    pub mime_type: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatSender {
    Student,
    System,
}

/// One line of the onboarding chat transcript.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: RecordId,
    pub student_id: Option<RecordId>,
    pub sender: ChatSender,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ChatMessageDraft {
    #[serde(default)]
    pub student_id: Option<RecordId>,
    pub sender: ChatSender,
    pub message: String,
}

/// A course offered for enrollment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: RecordId,
    pub name: String,
    pub code: String,
    pub description: String,
    pub duration_months: u32,
    pub coordinator: String,
    pub monthly_price: f64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CourseDraft {
    pub name: String,
    pub code: String,
    pub description: String,
    pub duration_months: u32,
    pub coordinator: String,
    pub monthly_price: f64,
    #[serde(default = "default_active")]
    pub active: bool,
}

/// A time slot a course is taught in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourseShift {
    pub id: RecordId,
    pub course_id: RecordId,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    /// Comma-separated weekday abbreviations, e.g. `"seg,ter,qua,qui,sex"`.
    pub weekdays: String,
    pub active: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CourseShiftDraft {
    pub course_id: RecordId,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub weekdays: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

/// A delivery mode a course is offered in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourseModality {
    pub id: RecordId,
    pub course_id: RecordId,
    pub name: String,
    pub description: String,
    pub active: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CourseModalityDraft {
    pub course_id: RecordId,
    pub name: String,
    pub description: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn student_answers_flatten_onto_the_record() {
        let mut values = HashMap::new();
        values.insert("fullName".to_string(), json!("Ana Souza"));
        let student = Student {
            id: 1,
            status: EnrollmentStatus::Pending,
            registration_date: Utc::now(),
            values,
        };

        let json = serde_json::to_value(&student).unwrap();
        assert_eq!(json["fullName"], "Ana Souza");
        assert_eq!(json["status"], "pending");

        let back: Student = serde_json::from_value(json).unwrap();
        assert_eq!(back, student);
    }

    #[test]
    fn draft_collects_unknown_keys_as_answers() {
        let draft: StudentDraft =
            serde_json::from_value(json!({ "fullName": "Ana", "cpf": "123" })).unwrap();
        assert!(draft.status.is_none());
        assert_eq!(draft.values.len(), 2);
    }
}
