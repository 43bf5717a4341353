//! Dynamic form and document-requirement configuration for the
//! enrollment platform.
//!
//! Administrators edit two ordered collections — form-field definitions
//! and document-requirement definitions — and the student-facing
//! renderer consumes read-only, filtered views of them:
//!
//! - fields partition into the `personal`/`contact`/`course` steps of
//!   the registration wizard, ordered within their section;
//! - requirements form the globally ordered document-upload checklist.
//!
//! Storage sits behind repository traits so backends are swappable; the
//! bundled backend is an in-memory map. Reordering persists through a
//! single atomic batch, never one update per item.

pub mod engine;
pub mod memory;
pub mod model;
pub mod reorder;
pub mod repository;
pub mod seed;
pub mod view;

pub use engine::{ConfigError, FormEngine};
pub use model::{
    DefinitionId, DocumentRequirementDefinition, FieldDraft, FieldKind, FieldOption,
    FormFieldDefinition, RequirementDraft, Section,
};
pub use repository::{FieldRepository, RepositoryError, RequirementRepository};

pub type Result<T> = std::result::Result<T, ConfigError>;
