//! In-memory repository implementations.
//!
//! Process-lifetime storage over locked maps, with a monotonic id
//! counter per collection. Ids are never reused, including after delete.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::model::{
    DefinitionId, DocumentRequirementDefinition, FieldDraft, FormFieldDefinition, RequirementDraft,
};
use crate::repository::{FieldRepository, RepositoryError, RequirementRepository};

#[derive(Default)]
pub struct InMemoryFieldRepository {
    records: RwLock<HashMap<DefinitionId, FormFieldDefinition>>,
    next_id: AtomicI32,
}

impl InMemoryFieldRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

#[async_trait]
impl FieldRepository for InMemoryFieldRepository {
    async fn create(&self, draft: FieldDraft) -> Result<FormFieldDefinition, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let record = draft.into_definition(id);
        self.records.write().insert(id, record.clone());
        Ok(record)
    }

    async fn get(
        &self,
        id: DefinitionId,
    ) -> Result<Option<FormFieldDefinition>, RepositoryError> {
        Ok(self.records.read().get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<FormFieldDefinition>, RepositoryError> {
        Ok(self.records.read().values().cloned().collect())
    }

    async fn replace(
        &self,
        record: FormFieldDefinition,
    ) -> Result<FormFieldDefinition, RepositoryError> {
        let mut records = self.records.write();
        match records.get_mut(&record.id) {
            Some(slot) => {
                *slot = record.clone();
                Ok(record)
            }
            None => Err(RepositoryError::NotFound(record.id)),
        }
    }

    async fn delete(&self, id: DefinitionId) -> Result<bool, RepositoryError> {
        Ok(self.records.write().remove(&id).is_some())
    }

    async fn set_orders(&self, orders: &[(DefinitionId, i32)]) -> Result<(), RepositoryError> {
        let mut records = self.records.write();
        if let Some(&(missing, _)) = orders.iter().find(|(id, _)| !records.contains_key(id)) {
            return Err(RepositoryError::NotFound(missing));
        }
        for &(id, order) in orders {
            if let Some(record) = records.get_mut(&id) {
                record.order = order;
            }
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryRequirementRepository {
    records: RwLock<HashMap<DefinitionId, DocumentRequirementDefinition>>,
    next_id: AtomicI32,
}

impl InMemoryRequirementRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

#[async_trait]
impl RequirementRepository for InMemoryRequirementRepository {
    async fn create(
        &self,
        draft: RequirementDraft,
    ) -> Result<DocumentRequirementDefinition, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let record = draft.into_definition(id);
        self.records.write().insert(id, record.clone());
        Ok(record)
    }

    async fn get(
        &self,
        id: DefinitionId,
    ) -> Result<Option<DocumentRequirementDefinition>, RepositoryError> {
        Ok(self.records.read().get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<DocumentRequirementDefinition>, RepositoryError> {
        Ok(self.records.read().values().cloned().collect())
    }

    async fn replace(
        &self,
        record: DocumentRequirementDefinition,
    ) -> Result<DocumentRequirementDefinition, RepositoryError> {
        let mut records = self.records.write();
        match records.get_mut(&record.id) {
            Some(slot) => {
                *slot = record.clone();
                Ok(record)
            }
            None => Err(RepositoryError::NotFound(record.id)),
        }
    }

    async fn delete(&self, id: DefinitionId) -> Result<bool, RepositoryError> {
        Ok(self.records.write().remove(&id).is_some())
    }

    async fn set_orders(&self, orders: &[(DefinitionId, i32)]) -> Result<(), RepositoryError> {
        let mut records = self.records.write();
        if let Some(&(missing, _)) = orders.iter().find(|(id, _)| !records.contains_key(id)) {
            return Err(RepositoryError::NotFound(missing));
        }
        for &(id, order) in orders {
            if let Some(record) = records.get_mut(&id) {
                record.order = order;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldKind, Section};

    fn draft(name: &str, order: i32) -> FieldDraft {
        FieldDraft {
            name: name.into(),
            label: name.to_uppercase(),
            kind: FieldKind::Text,
            required: false,
            section: Section::Personal,
            order,
            active: true,
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let repo = InMemoryFieldRepository::new();
        let a = repo.create(draft("a", 1)).await.unwrap();
        let b = repo.create(draft("b", 2)).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repo = InMemoryFieldRepository::new();
        let a = repo.create(draft("a", 1)).await.unwrap();
        assert!(repo.delete(a.id).await.unwrap());
        let b = repo.create(draft("b", 1)).await.unwrap();
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn delete_reports_absence() {
        let repo = InMemoryFieldRepository::new();
        assert!(!repo.delete(99).await.unwrap());
    }

    #[tokio::test]
    async fn replace_unknown_id_is_not_found() {
        let repo = InMemoryFieldRepository::new();
        let record = draft("a", 1).into_definition(7);
        let err = repo.replace(record).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(7)));
    }

    #[tokio::test]
    async fn set_orders_is_all_or_nothing() {
        let repo = InMemoryFieldRepository::new();
        let a = repo.create(draft("a", 1)).await.unwrap();
        let b = repo.create(draft("b", 2)).await.unwrap();

        let err = repo
            .set_orders(&[(a.id, 5), (99, 6), (b.id, 7)])
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(99)));

        // Nothing applied from the failed batch.
        assert_eq!(repo.get(a.id).await.unwrap().unwrap().order, 1);
        assert_eq!(repo.get(b.id).await.unwrap().unwrap().order, 2);

        repo.set_orders(&[(a.id, 2), (b.id, 1)]).await.unwrap();
        assert_eq!(repo.get(a.id).await.unwrap().unwrap().order, 2);
        assert_eq!(repo.get(b.id).await.unwrap().unwrap().order, 1);
    }
}
