//! Configuration engine: a thin validation and orchestration layer over
//! the repository ports.
//!
//! The engine is stateless with respect to any particular student
//! submission; it owns the definition collections and nothing else.
//! Concurrent admin edits are last-write-wins at call granularity.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::memory::{InMemoryFieldRepository, InMemoryRequirementRepository};
use crate::model::{
    DefinitionId, DocumentRequirementDefinition, FieldDraft, FormFieldDefinition,
    RequirementDraft, Section,
};
use crate::repository::{FieldRepository, RepositoryError, RequirementRepository};
use crate::{reorder, seed, view};

/// Engine-level failure, returned as a value up to the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0}")]
    Validation(String),
    #[error("{kind} {id} not found")]
    NotFound {
        kind: &'static str,
        id: DefinitionId,
    },
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<RepositoryError> for ConfigError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => ConfigError::NotFound {
                kind: "definition",
                id,
            },
            RepositoryError::Storage(message) => ConfigError::Storage(message),
        }
    }
}

pub struct FormEngine {
    fields: Arc<dyn FieldRepository>,
    requirements: Arc<dyn RequirementRepository>,
}

impl FormEngine {
    pub fn new(
        fields: Arc<dyn FieldRepository>,
        requirements: Arc<dyn RequirementRepository>,
    ) -> Self {
        Self {
            fields,
            requirements,
        }
    }

    /// Engine over fresh in-memory repositories.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryFieldRepository::new()),
            Arc::new(InMemoryRequirementRepository::new()),
        )
    }

    // ==== Form fields ====

    pub async fn create_field(&self, draft: FieldDraft) -> crate::Result<FormFieldDefinition> {
        require_nonblank("name", &draft.name)?;
        require_nonblank("label", &draft.label)?;
        self.ensure_field_name_free(&draft.name, None).await?;
        Ok(self.fields.create(draft).await?)
    }

    pub async fn field(&self, id: DefinitionId) -> crate::Result<FormFieldDefinition> {
        self.fields
            .get(id)
            .await?
            .ok_or(ConfigError::NotFound { kind: "form field", id })
    }

    /// Every field, sorted ascending by `(order, id)`.
    pub async fn list_fields(&self) -> crate::Result<Vec<FormFieldDefinition>> {
        let mut fields = self.fields.list().await?;
        fields.sort_by_key(|f| (f.order, f.id));
        Ok(fields)
    }

    /// Merge a partial JSON payload onto the stored record. The `id` key
    /// is stripped from the patch, mirroring the original insert schema.
    pub async fn update_field(
        &self,
        id: DefinitionId,
        patch: Value,
    ) -> crate::Result<FormFieldDefinition> {
        let current = self.field(id).await?;
        let merged = merge_record(&current, patch)?;
        let record: FormFieldDefinition =
            serde_json::from_value(merged).map_err(|e| ConfigError::Validation(e.to_string()))?;
        require_nonblank("name", &record.name)?;
        require_nonblank("label", &record.label)?;
        self.ensure_field_name_free(&record.name, Some(id)).await?;
        Ok(self.fields.replace(record).await?)
    }

    /// Deleting an absent id is tolerated; the signal is only logged.
    pub async fn delete_field(&self, id: DefinitionId) -> crate::Result<()> {
        if !self.fields.delete(id).await? {
            tracing::debug!(id, "delete of absent form field");
        }
        Ok(())
    }

    pub async fn active_fields_for_section(
        &self,
        section: Section,
    ) -> crate::Result<Vec<FormFieldDefinition>> {
        Ok(view::active_fields_for_section(
            &self.fields.list().await?,
            section,
        ))
    }

    /// Names of required active fields of `section` left blank in
    /// `answers`. The renderer gates step advancement on this being empty.
    pub async fn missing_required(
        &self,
        section: Section,
        answers: &HashMap<String, Value>,
    ) -> crate::Result<Vec<String>> {
        Ok(view::missing_required(
            &self.fields.list().await?,
            section,
            answers,
        ))
    }

    /// Reposition the field at display index `from` to index `to` over
    /// the full `(order, id)`-sorted list, then persist dense orders.
    pub async fn move_field(
        &self,
        from: usize,
        to: usize,
    ) -> crate::Result<Vec<FormFieldDefinition>> {
        let ids: Vec<_> = self.list_fields().await?.iter().map(|f| f.id).collect();
        let orders = reorder::splice_reorder(ids, from, to)
            .ok_or_else(|| ConfigError::Validation("reorder index out of range".into()))?;
        self.fields.set_orders(&orders).await?;
        self.list_fields().await
    }

    /// Assign dense orders following an explicit id sequence. The
    /// sequence must be a permutation of the stored ids; nothing is
    /// applied otherwise.
    pub async fn set_field_sequence(
        &self,
        sequence: &[DefinitionId],
    ) -> crate::Result<Vec<FormFieldDefinition>> {
        let stored: Vec<_> = self.fields.list().await?.iter().map(|f| f.id).collect();
        ensure_permutation(&stored, sequence)?;
        self.fields
            .set_orders(&reorder::dense_orders(sequence))
            .await?;
        self.list_fields().await
    }

    async fn ensure_field_name_free(
        &self,
        name: &str,
        except: Option<DefinitionId>,
    ) -> crate::Result<()> {
        let taken = self
            .fields
            .list()
            .await?
            .iter()
            .any(|f| f.name == name && Some(f.id) != except);
        if taken {
            return Err(ConfigError::Validation(format!(
                "a form field named \"{name}\" already exists"
            )));
        }
        Ok(())
    }

    // ==== Document requirements ====

    pub async fn create_requirement(
        &self,
        draft: RequirementDraft,
    ) -> crate::Result<DocumentRequirementDefinition> {
        require_nonblank("name", &draft.name)?;
        self.ensure_requirement_name_free(&draft.name, None).await?;
        Ok(self.requirements.create(draft).await?)
    }

    pub async fn requirement(
        &self,
        id: DefinitionId,
    ) -> crate::Result<DocumentRequirementDefinition> {
        self.requirements.get(id).await?.ok_or(ConfigError::NotFound {
            kind: "document requirement",
            id,
        })
    }

    pub async fn list_requirements(
        &self,
    ) -> crate::Result<Vec<DocumentRequirementDefinition>> {
        let mut requirements = self.requirements.list().await?;
        requirements.sort_by_key(|r| (r.order, r.id));
        Ok(requirements)
    }

    pub async fn update_requirement(
        &self,
        id: DefinitionId,
        patch: Value,
    ) -> crate::Result<DocumentRequirementDefinition> {
        let current = self.requirement(id).await?;
        let merged = merge_record(&current, patch)?;
        let record: DocumentRequirementDefinition =
            serde_json::from_value(merged).map_err(|e| ConfigError::Validation(e.to_string()))?;
        require_nonblank("name", &record.name)?;
        self.ensure_requirement_name_free(&record.name, Some(id))
            .await?;
        Ok(self.requirements.replace(record).await?)
    }

    pub async fn delete_requirement(&self, id: DefinitionId) -> crate::Result<()> {
        if !self.requirements.delete(id).await? {
            tracing::debug!(id, "delete of absent document requirement");
        }
        Ok(())
    }

    /// The upload checklist: active requirements ascending `(order, id)`.
    pub async fn active_requirements(
        &self,
    ) -> crate::Result<Vec<DocumentRequirementDefinition>> {
        Ok(view::active_requirements(&self.requirements.list().await?))
    }

    pub async fn move_requirement(
        &self,
        from: usize,
        to: usize,
    ) -> crate::Result<Vec<DocumentRequirementDefinition>> {
        let ids: Vec<_> = self.list_requirements().await?.iter().map(|r| r.id).collect();
        let orders = reorder::splice_reorder(ids, from, to)
            .ok_or_else(|| ConfigError::Validation("reorder index out of range".into()))?;
        self.requirements.set_orders(&orders).await?;
        self.list_requirements().await
    }

    pub async fn set_requirement_sequence(
        &self,
        sequence: &[DefinitionId],
    ) -> crate::Result<Vec<DocumentRequirementDefinition>> {
        let stored: Vec<_> = self.requirements.list().await?.iter().map(|r| r.id).collect();
        ensure_permutation(&stored, sequence)?;
        self.requirements
            .set_orders(&reorder::dense_orders(sequence))
            .await?;
        self.list_requirements().await
    }

    async fn ensure_requirement_name_free(
        &self,
        name: &str,
        except: Option<DefinitionId>,
    ) -> crate::Result<()> {
        let taken = self
            .requirements
            .list()
            .await?
            .iter()
            .any(|r| r.name == name && Some(r.id) != except);
        if taken {
            return Err(ConfigError::Validation(format!(
                "a document requirement named \"{name}\" already exists"
            )));
        }
        Ok(())
    }

    // ==== Seeding ====

    pub async fn is_empty(&self) -> crate::Result<bool> {
        Ok(self.fields.list().await?.is_empty() && self.requirements.list().await?.is_empty())
    }

    /// Install the stock configuration. Each collection is seeded only
    /// when it is empty, so repeated calls are no-ops.
    pub async fn seed_defaults(&self) -> crate::Result<()> {
        if self.fields.list().await?.is_empty() {
            for draft in seed::default_form_fields() {
                self.fields.create(draft).await?;
            }
            tracing::info!("seeded default form fields");
        }
        if self.requirements.list().await?.is_empty() {
            for draft in seed::default_document_requirements() {
                self.requirements.create(draft).await?;
            }
            tracing::info!("seeded default document requirements");
        }
        Ok(())
    }
}

fn require_nonblank(what: &str, value: &str) -> crate::Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{what} must not be blank")));
    }
    Ok(())
}

/// Shallow key merge of `patch` onto the serialized current record,
/// mirroring the original's object-spread update. `id` stays immutable.
fn merge_record<T: Serialize>(current: &T, patch: Value) -> crate::Result<Value> {
    let Value::Object(patch) = patch else {
        return Err(ConfigError::Validation(
            "update payload must be a JSON object".into(),
        ));
    };
    let base = serde_json::to_value(current).map_err(|e| ConfigError::Storage(e.to_string()))?;
    let Value::Object(mut merged) = base else {
        return Err(ConfigError::Storage(
            "definition record did not serialize to an object".into(),
        ));
    };
    for (key, value) in patch {
        if key == "id" {
            continue;
        }
        merged.insert(key, value);
    }
    Ok(Value::Object(merged))
}

fn ensure_permutation(stored: &[DefinitionId], sequence: &[DefinitionId]) -> crate::Result<()> {
    let mut want = stored.to_vec();
    want.sort_unstable();
    let mut got = sequence.to_vec();
    got.sort_unstable();
    if want != got {
        return Err(ConfigError::Validation(
            "sequence must list every definition id exactly once".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldKind, FieldOption};
    use serde_json::json;

    fn draft(name: &str, section: Section, order: i32) -> FieldDraft {
        FieldDraft {
            name: name.into(),
            label: name.to_uppercase(),
            kind: FieldKind::Text,
            required: true,
            section,
            order,
            active: true,
        }
    }

    #[tokio::test]
    async fn create_then_fetch_round_trip() {
        let engine = FormEngine::in_memory();
        let created = engine
            .create_field(draft("fullName", Section::Personal, 1))
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let fetched = engine.field(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn equal_order_ties_break_by_id() {
        let engine = FormEngine::in_memory();
        engine
            .create_field(draft("fullName", Section::Personal, 1))
            .await
            .unwrap();
        engine
            .create_field(draft("cpf", Section::Personal, 1))
            .await
            .unwrap();

        let view = engine
            .active_fields_for_section(Section::Personal)
            .await
            .unwrap();
        let names: Vec<_> = view.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["fullName", "cpf"]);
    }

    #[tokio::test]
    async fn partial_update_touches_only_named_keys() {
        let engine = FormEngine::in_memory();
        let created = engine
            .create_field(draft("whatsapp", Section::Contact, 3))
            .await
            .unwrap();
        engine
            .update_field(created.id, json!({ "required": false }))
            .await
            .unwrap();

        let updated = engine
            .update_field(created.id, json!({ "required": true }))
            .await
            .unwrap();
        assert!(updated.required);
        assert_eq!(updated.name, "whatsapp");
        assert_eq!(updated.section, Section::Contact);
        assert_eq!(updated.order, 3);
    }

    #[tokio::test]
    async fn update_cannot_change_id() {
        let engine = FormEngine::in_memory();
        let created = engine
            .create_field(draft("email", Section::Contact, 1))
            .await
            .unwrap();

        let updated = engine
            .update_field(created.id, json!({ "id": 42, "order": 9 }))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.order, 9);
    }

    #[tokio::test]
    async fn kind_change_to_choice_requires_options() {
        let engine = FormEngine::in_memory();
        let created = engine
            .create_field(draft("gender", Section::Personal, 5))
            .await
            .unwrap();

        let err = engine
            .update_field(created.id, json!({ "type": "select" }))
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let updated = engine
            .update_field(
                created.id,
                json!({ "type": "select", "options": [{ "value": "outro", "label": "Outro" }] }),
            )
            .await
            .unwrap();
        assert_eq!(
            updated.kind.options(),
            Some(&[FieldOption::new("outro", "Outro")][..])
        );
    }

    #[tokio::test]
    async fn duplicate_names_are_rejected() {
        let engine = FormEngine::in_memory();
        engine
            .create_field(draft("cpf", Section::Personal, 1))
            .await
            .unwrap();

        let err = engine
            .create_field(draft("cpf", Section::Personal, 2))
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        // Renaming onto a taken name is rejected the same way.
        let other = engine
            .create_field(draft("rg", Section::Personal, 2))
            .await
            .unwrap();
        let err = engine
            .update_field(other.id, json!({ "name": "cpf" }))
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        // A self-referential "rename" stays legal.
        engine
            .update_field(other.id, json!({ "name": "rg" }))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let engine = FormEngine::in_memory();
        let err = engine
            .create_field(draft("  ", Section::Personal, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let engine = FormEngine::in_memory();
        let err = engine
            .update_field(12, json!({ "required": true }))
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { id: 12, .. }));
    }

    #[tokio::test]
    async fn deleted_fields_leave_every_view() {
        let engine = FormEngine::in_memory();
        for name in ["fullName", "cpf", "rg"] {
            engine
                .create_field(draft(name, Section::Personal, 1))
                .await
                .unwrap();
        }

        engine.delete_field(3).await.unwrap();
        // Absent id: tolerated, still success.
        engine.delete_field(3).await.unwrap();

        let all = engine.list_fields().await.unwrap();
        assert!(all.iter().all(|f| f.id != 3));
        let section = engine
            .active_fields_for_section(Section::Personal)
            .await
            .unwrap();
        assert!(section.iter().all(|f| f.id != 3));
    }

    #[tokio::test]
    async fn move_there_and_back_restores_dense_orders() {
        let engine = FormEngine::in_memory();
        for (name, order) in [("a", 1), ("b", 2), ("c", 3), ("d", 4)] {
            engine
                .create_field(draft(name, Section::Personal, order))
                .await
                .unwrap();
        }

        engine.move_field(0, 2).await.unwrap();
        let restored = engine.move_field(2, 0).await.unwrap();

        let orders: Vec<_> = restored.iter().map(|f| (f.name.clone(), f.order)).collect();
        assert_eq!(
            orders,
            [
                ("a".to_string(), 1),
                ("b".to_string(), 2),
                ("c".to_string(), 3),
                ("d".to_string(), 4)
            ]
        );
    }

    #[tokio::test]
    async fn sequence_must_be_a_permutation() {
        let engine = FormEngine::in_memory();
        for (name, order) in [("a", 1), ("b", 2)] {
            engine
                .create_field(draft(name, Section::Personal, order))
                .await
                .unwrap();
        }

        assert!(engine.set_field_sequence(&[2]).await.is_err());
        assert!(engine.set_field_sequence(&[2, 2]).await.is_err());
        assert!(engine.set_field_sequence(&[2, 7]).await.is_err());

        let reordered = engine.set_field_sequence(&[2, 1]).await.unwrap();
        assert_eq!(reordered[0].name, "b");
        assert_eq!(reordered[0].order, 1);
        assert_eq!(reordered[1].order, 2);
    }

    #[tokio::test]
    async fn seeding_is_idempotent() {
        let engine = FormEngine::in_memory();
        assert!(engine.is_empty().await.unwrap());

        engine.seed_defaults().await.unwrap();
        assert!(!engine.is_empty().await.unwrap());
        let fields = engine.list_fields().await.unwrap();
        let requirements = engine.list_requirements().await.unwrap();
        assert_eq!(fields.len(), 18);
        assert_eq!(requirements.len(), 5);

        engine.seed_defaults().await.unwrap();
        assert_eq!(engine.list_fields().await.unwrap(), fields);
        assert_eq!(engine.list_requirements().await.unwrap(), requirements);
    }

    #[tokio::test]
    async fn requirement_checklist_is_filtered_and_ordered() {
        let engine = FormEngine::in_memory();
        engine.seed_defaults().await.unwrap();

        engine
            .update_requirement(2, json!({ "active": false }))
            .await
            .unwrap();

        let checklist = engine.active_requirements().await.unwrap();
        assert_eq!(checklist.len(), 4);
        assert!(checklist.iter().all(|r| r.id != 2));
        for pair in checklist.windows(2) {
            assert!((pair[0].order, pair[0].id) <= (pair[1].order, pair[1].id));
        }
    }
}
