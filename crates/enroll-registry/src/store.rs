//! Process-lifetime enrollment store.
//!
//! Locked maps with a monotonic id counter per collection. Writes are
//! last-write-wins; there is a single administrative writer in practice.

use std::collections::HashMap;

use chrono::Utc;
use parking_lot::RwLock;

use crate::model::{
    ChatMessage, ChatMessageDraft, Course, CourseDraft, CourseModality, CourseModalityDraft,
    CourseShift, CourseShiftDraft, DocumentDraft, RecordId, Student, StudentDraft, StoredDocument,
};
use crate::seed;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("{0}")]
    Validation(String),
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: RecordId },
}

pub type Result<T> = std::result::Result<T, RegistryError>;

struct Collection<T> {
    records: HashMap<RecordId, T>,
    next_id: RecordId,
}

impl<T> Collection<T> {
    fn new() -> Self {
        Self {
            records: HashMap::new(),
            next_id: 1,
        }
    }

    fn insert(&mut self, make: impl FnOnce(RecordId) -> T) -> &T {
        let id = self.next_id;
        self.next_id += 1;
        self.records.entry(id).or_insert_with(|| make(id))
    }
}

/// The whole enrollment store. Cheap to share behind an `Arc`.
pub struct EnrollmentStore {
    students: RwLock<Collection<Student>>,
    documents: RwLock<Collection<StoredDocument>>,
    chat_messages: RwLock<Collection<ChatMessage>>,
    courses: RwLock<Collection<Course>>,
    shifts: RwLock<Collection<CourseShift>>,
    modalities: RwLock<Collection<CourseModality>>,
}

impl EnrollmentStore {
    pub fn new() -> Self {
        Self {
            students: RwLock::new(Collection::new()),
            documents: RwLock::new(Collection::new()),
            chat_messages: RwLock::new(Collection::new()),
            courses: RwLock::new(Collection::new()),
            shifts: RwLock::new(Collection::new()),
            modalities: RwLock::new(Collection::new()),
        }
    }

    // ==== Students ====

    pub fn create_student(&self, draft: StudentDraft) -> Student {
        let mut students = self.students.write();
        students
            .insert(|id| Student {
                id,
                status: draft.status.unwrap_or_default(),
                registration_date: Utc::now(),
                values: draft.values,
            })
            .clone()
    }

    pub fn student(&self, id: RecordId) -> Result<Student> {
        self.students
            .read()
            .records
            .get(&id)
            .cloned()
            .ok_or(RegistryError::NotFound { kind: "student", id })
    }

    pub fn list_students(&self) -> Vec<Student> {
        let mut students: Vec<_> = self.students.read().records.values().cloned().collect();
        students.sort_by_key(|s| s.id);
        students
    }

    /// Merge submitted answers onto the stored map; replace the status
    /// when the draft names one.
    pub fn update_student(&self, id: RecordId, draft: StudentDraft) -> Result<Student> {
        let mut students = self.students.write();
        let student = students
            .records
            .get_mut(&id)
            .ok_or(RegistryError::NotFound { kind: "student", id })?;
        if let Some(status) = draft.status {
            student.status = status;
        }
        student.values.extend(draft.values);
        Ok(student.clone())
    }

    // ==== Documents ====

    pub fn create_document(&self, draft: DocumentDraft) -> StoredDocument {
        let mut documents = self.documents.write();
        documents
            .insert(|id| StoredDocument {
                id,
                student_id: draft.student_id,
                requirement: draft.requirement,
                file_name: draft.file_name,
                file_data: draft.file_data,
                mime_type: draft.mime_type,
                upload_date: Utc::now(),
            })
            .clone()
    }

    pub fn document(&self, id: RecordId) -> Result<StoredDocument> {
        self.documents
            .read()
            .records
            .get(&id)
            .cloned()
            .ok_or(RegistryError::NotFound { kind: "document", id })
    }

    pub fn documents_for_student(&self, student_id: RecordId) -> Vec<StoredDocument> {
        let mut documents: Vec<_> = self
            .documents
            .read()
            .records
            .values()
            .filter(|d| d.student_id == student_id)
            .cloned()
            .collect();
        documents.sort_by_key(|d| d.id);
        documents
    }

    // ==== Chat transcript ====

    pub fn create_chat_message(&self, draft: ChatMessageDraft) -> ChatMessage {
        let mut messages = self.chat_messages.write();
        messages
            .insert(|id| ChatMessage {
                id,
                student_id: draft.student_id,
                sender: draft.sender,
                message: draft.message,
                timestamp: Utc::now(),
            })
            .clone()
    }

    pub fn chat_message(&self, id: RecordId) -> Result<ChatMessage> {
        self.chat_messages
            .read()
            .records
            .get(&id)
            .cloned()
            .ok_or(RegistryError::NotFound { kind: "chat message", id })
    }

    /// A student's transcript in the order the messages arrived.
    pub fn chat_for_student(&self, student_id: RecordId) -> Vec<ChatMessage> {
        let mut messages: Vec<_> = self
            .chat_messages
            .read()
            .records
            .values()
            .filter(|m| m.student_id == Some(student_id))
            .cloned()
            .collect();
        messages.sort_by_key(|m| (m.timestamp, m.id));
        messages
    }

    // ==== Course catalog ====

    pub fn create_course(&self, draft: CourseDraft) -> Course {
        let mut courses = self.courses.write();
        courses
            .insert(|id| Course {
                id,
                name: draft.name,
                code: draft.code,
                description: draft.description,
                duration_months: draft.duration_months,
                coordinator: draft.coordinator,
                monthly_price: draft.monthly_price,
                active: draft.active,
                created_at: Utc::now(),
            })
            .clone()
    }

    pub fn course(&self, id: RecordId) -> Result<Course> {
        self.courses
            .read()
            .records
            .get(&id)
            .cloned()
            .ok_or(RegistryError::NotFound { kind: "course", id })
    }

    pub fn list_courses(&self) -> Vec<Course> {
        let mut courses: Vec<_> = self.courses.read().records.values().cloned().collect();
        courses.sort_by_key(|c| c.id);
        courses
    }

    pub fn update_course(&self, id: RecordId, draft: CourseDraft) -> Result<Course> {
        let mut courses = self.courses.write();
        let course = courses
            .records
            .get_mut(&id)
            .ok_or(RegistryError::NotFound { kind: "course", id })?;
        course.name = draft.name;
        course.code = draft.code;
        course.description = draft.description;
        course.duration_months = draft.duration_months;
        course.coordinator = draft.coordinator;
        course.monthly_price = draft.monthly_price;
        course.active = draft.active;
        Ok(course.clone())
    }

    /// Remove a course along with its shifts and modalities. Absent ids
    /// are tolerated.
    pub fn delete_course(&self, id: RecordId) {
        if self.courses.write().records.remove(&id).is_none() {
            tracing::debug!(id, "delete of absent course");
        }
        self.shifts
            .write()
            .records
            .retain(|_, shift| shift.course_id != id);
        self.modalities
            .write()
            .records
            .retain(|_, modality| modality.course_id != id);
    }

    pub fn create_shift(&self, draft: CourseShiftDraft) -> CourseShift {
        let mut shifts = self.shifts.write();
        shifts
            .insert(|id| CourseShift {
                id,
                course_id: draft.course_id,
                name: draft.name,
                start_time: draft.start_time,
                end_time: draft.end_time,
                weekdays: draft.weekdays,
                active: draft.active,
            })
            .clone()
    }

    pub fn shift(&self, id: RecordId) -> Result<CourseShift> {
        self.shifts
            .read()
            .records
            .get(&id)
            .cloned()
            .ok_or(RegistryError::NotFound { kind: "course shift", id })
    }

    pub fn shifts_for_course(&self, course_id: RecordId) -> Vec<CourseShift> {
        let mut shifts: Vec<_> = self
            .shifts
            .read()
            .records
            .values()
            .filter(|s| s.course_id == course_id)
            .cloned()
            .collect();
        shifts.sort_by_key(|s| s.id);
        shifts
    }

    pub fn update_shift(&self, id: RecordId, draft: CourseShiftDraft) -> Result<CourseShift> {
        let mut shifts = self.shifts.write();
        let shift = shifts
            .records
            .get_mut(&id)
            .ok_or(RegistryError::NotFound { kind: "course shift", id })?;
        shift.course_id = draft.course_id;
        shift.name = draft.name;
        shift.start_time = draft.start_time;
        shift.end_time = draft.end_time;
        shift.weekdays = draft.weekdays;
        shift.active = draft.active;
        Ok(shift.clone())
    }

    pub fn delete_shift(&self, id: RecordId) {
        if self.shifts.write().records.remove(&id).is_none() {
            tracing::debug!(id, "delete of absent course shift");
        }
    }

    pub fn create_modality(&self, draft: CourseModalityDraft) -> CourseModality {
        let mut modalities = self.modalities.write();
        modalities
            .insert(|id| CourseModality {
                id,
                course_id: draft.course_id,
                name: draft.name,
                description: draft.description,
                active: draft.active,
            })
            .clone()
    }

    pub fn modality(&self, id: RecordId) -> Result<CourseModality> {
        self.modalities
            .read()
            .records
            .get(&id)
            .cloned()
            .ok_or(RegistryError::NotFound { kind: "course modality", id })
    }

    pub fn modalities_for_course(&self, course_id: RecordId) -> Vec<CourseModality> {
        let mut modalities: Vec<_> = self
            .modalities
            .read()
            .records
            .values()
            .filter(|m| m.course_id == course_id)
            .cloned()
            .collect();
        modalities.sort_by_key(|m| m.id);
        modalities
    }

    pub fn update_modality(
        &self,
        id: RecordId,
        draft: CourseModalityDraft,
    ) -> Result<CourseModality> {
        let mut modalities = self.modalities.write();
        let modality = modalities
            .records
            .get_mut(&id)
            .ok_or(RegistryError::NotFound { kind: "course modality", id })?;
        modality.course_id = draft.course_id;
        modality.name = draft.name;
        modality.description = draft.description;
        modality.active = draft.active;
        Ok(modality.clone())
    }

    pub fn delete_modality(&self, id: RecordId) {
        if self.modalities.write().records.remove(&id).is_none() {
            tracing::debug!(id, "delete of absent course modality");
        }
    }

    // ==== Seeding ====

    pub fn courses_is_empty(&self) -> bool {
        self.courses.read().records.is_empty()
    }

    /// Install the stock course catalog once. A non-empty catalog is
    /// left untouched.
    pub fn seed_default_courses(&self) {
        if !self.courses_is_empty() {
            return;
        }
        for draft in seed::default_courses() {
            let course = self.create_course(draft);
            for (name, start_time, end_time) in seed::standard_shifts() {
                self.create_shift(CourseShiftDraft {
                    course_id: course.id,
                    name: name.into(),
                    start_time: start_time.into(),
                    end_time: end_time.into(),
                    weekdays: seed::WEEKDAYS.into(),
                    active: true,
                });
            }
            for (name, description) in seed::standard_modalities() {
                self.create_modality(CourseModalityDraft {
                    course_id: course.id,
                    name: name.into(),
                    description: description.into(),
                    active: true,
                });
            }
        }
        tracing::info!("seeded default course catalog");
    }
}

impl Default for EnrollmentStore {
    fn default() -> Self {
        Self::new()
    }
}
