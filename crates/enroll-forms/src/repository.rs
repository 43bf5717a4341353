//! Repository ports for the two definition collections.
//!
//! The engine only talks to these traits; backends are swappable. The
//! in-memory implementation lives in [`crate::memory`].

use async_trait::async_trait;

use crate::model::{
    DefinitionId, DocumentRequirementDefinition, FieldDraft, FormFieldDefinition, RequirementDraft,
};

/// Storage-level failure. Not-found is an explicit value, never a panic.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RepositoryError {
    #[error("record {0} not found")]
    NotFound(DefinitionId),
    #[error("storage error: {0}")]
    Storage(String),
}

/// Form-field definition storage.
#[async_trait]
pub trait FieldRepository: Send + Sync {
    /// Assign the next sequential id and store the record.
    async fn create(&self, draft: FieldDraft) -> Result<FormFieldDefinition, RepositoryError>;

    async fn get(&self, id: DefinitionId)
        -> Result<Option<FormFieldDefinition>, RepositoryError>;

    /// Every stored record, in no particular order.
    async fn list(&self) -> Result<Vec<FormFieldDefinition>, RepositoryError>;

    /// Replace the record with the same id wholesale.
    async fn replace(
        &self,
        record: FormFieldDefinition,
    ) -> Result<FormFieldDefinition, RepositoryError>;

    /// Remove the record. Returns whether it existed.
    async fn delete(&self, id: DefinitionId) -> Result<bool, RepositoryError>;

    /// Assign new `order` values in one atomic batch. Either every pair
    /// applies or none does.
    async fn set_orders(&self, orders: &[(DefinitionId, i32)]) -> Result<(), RepositoryError>;
}

/// Document-requirement definition storage.
#[async_trait]
pub trait RequirementRepository: Send + Sync {
    async fn create(
        &self,
        draft: RequirementDraft,
    ) -> Result<DocumentRequirementDefinition, RepositoryError>;

    async fn get(
        &self,
        id: DefinitionId,
    ) -> Result<Option<DocumentRequirementDefinition>, RepositoryError>;

    async fn list(&self) -> Result<Vec<DocumentRequirementDefinition>, RepositoryError>;

    async fn replace(
        &self,
        record: DocumentRequirementDefinition,
    ) -> Result<DocumentRequirementDefinition, RepositoryError>;

    async fn delete(&self, id: DefinitionId) -> Result<bool, RepositoryError>;

    async fn set_orders(&self, orders: &[(DefinitionId, i32)]) -> Result<(), RepositoryError>;
}
