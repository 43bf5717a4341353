//! Enrollment store for the student-enrollment platform.
//!
//! Keyed records with no non-trivial invariants beyond id uniqueness:
//! students (dynamic answer maps), uploaded documents, the onboarding
//! chat transcript, and the course catalog with its shifts and
//! modalities. Form configuration lives in `enroll-forms`; this crate
//! only stores what students and admins produce.

pub mod model;
pub mod seed;
pub mod store;

pub use model::{
    ChatMessage, ChatMessageDraft, ChatSender, Course, CourseDraft, CourseModality,
    CourseModalityDraft, CourseShift, CourseShiftDraft, DocumentDraft, EnrollmentStatus, RecordId,
    StoredDocument, Student, StudentDraft,
};
pub use store::{EnrollmentStore, RegistryError};
