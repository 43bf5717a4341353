//! Definition records for the configurable enrollment form.
//!
//! Definitions are admin-authored configuration, not student data. A
//! [`FormFieldDefinition`] describes one input of the multi-step
//! registration form; a [`DocumentRequirementDefinition`] describes one
//! slot of the document-upload checklist.

use serde::{Deserialize, Serialize};

/// Repository-assigned identifier. Sequential per collection, never reused.
pub type DefinitionId = i32;

/// The step of the registration form a field belongs to. The fourth step
/// (documents) is driven by [`DocumentRequirementDefinition`] instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Personal,
    Contact,
    Course,
}

/// One entry of a select or radio option list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

impl FieldOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Input kind of a form field. Choice kinds carry their option list so
/// the catalog lives in configuration data rather than in the renderer.
///
/// Serialized internally tagged as `"type"`, so the wire shape stays
/// `{"type": "select", "options": [...]}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Date,
    Select { options: Vec<FieldOption> },
    Radio { options: Vec<FieldOption> },
    Textarea,
}

impl FieldKind {
    /// Option list for choice kinds, `None` for free-form kinds.
    pub fn options(&self) -> Option<&[FieldOption]> {
        match self {
            FieldKind::Select { options } | FieldKind::Radio { options } => Some(options),
            _ => None,
        }
    }
}

/// An admin-authored form field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormFieldDefinition {
    pub id: DefinitionId,
    /// Machine key; doubles as the submission map key for student answers.
    pub name: String,
    pub label: String,
    #[serde(flatten)]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    pub section: Section,
    /// Display position within the section. Ties break on `id` ascending.
    pub order: i32,
    /// Soft-delete flag; inactive fields are hidden from students but kept.
    #[serde(default = "default_active")]
    pub active: bool,
}

/// Creation payload for a form field; the repository assigns the id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldDraft {
    pub name: String,
    pub label: String,
    #[serde(flatten)]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    pub section: Section,
    pub order: i32,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl FieldDraft {
    pub fn into_definition(self, id: DefinitionId) -> FormFieldDefinition {
        FormFieldDefinition {
            id,
            name: self.name,
            label: self.label,
            kind: self.kind,
            required: self.required,
            section: self.section,
            order: self.order,
            active: self.active,
        }
    }
}

/// An admin-authored document-upload slot. Ordering is global, not
/// sectioned; `name` is the upload slot's key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentRequirementDefinition {
    pub id: DefinitionId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default = "default_active")]
    pub active: bool,
    pub order: i32,
}

/// Creation payload for a document requirement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RequirementDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default = "default_active")]
    pub active: bool,
    pub order: i32,
}

impl RequirementDraft {
    pub fn into_definition(self, id: DefinitionId) -> DocumentRequirementDefinition {
        DocumentRequirementDefinition {
            id,
            name: self.name,
            description: self.description,
            required: self.required,
            active: self.active,
            order: self.order,
        }
    }
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_kind_wire_shape() {
        let text: FieldKind = serde_json::from_str(r#"{"type":"text"}"#).unwrap();
        assert_eq!(text, FieldKind::Text);

        let select: FieldKind =
            serde_json::from_str(r#"{"type":"select","options":[{"value":"m","label":"M"}]}"#)
                .unwrap();
        assert_eq!(select.options().unwrap().len(), 1);
    }

    #[test]
    fn draft_defaults() {
        let draft: FieldDraft = serde_json::from_str(
            r#"{"name":"fullName","label":"Nome Completo","type":"text","section":"personal","order":1}"#,
        )
        .unwrap();
        assert!(!draft.required);
        assert!(draft.active);
    }

    #[test]
    fn definition_round_trip_keeps_type_key() {
        let field = FieldDraft {
            name: "gender".into(),
            label: "Gênero".into(),
            kind: FieldKind::Select {
                options: vec![FieldOption::new("masculino", "Masculino")],
            },
            required: true,
            section: Section::Personal,
            order: 5,
            active: true,
        }
        .into_definition(3);

        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "select");
        assert_eq!(json["options"][0]["value"], "masculino");
        assert_eq!(json["section"], "personal");

        let back: FormFieldDefinition = serde_json::from_value(json).unwrap();
        assert_eq!(back, field);
    }
}
