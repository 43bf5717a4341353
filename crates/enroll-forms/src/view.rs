//! Read views consumed by the student-facing renderer.
//!
//! Views are recomputed on every call from the current definitions;
//! nothing here is cached. Sorting is ascending `(order, id)` so that
//! duplicate `order` values (possible transiently during admin edits)
//! still produce a deterministic sequence.

use std::collections::HashMap;

use serde_json::Value;

use crate::model::{DocumentRequirementDefinition, FormFieldDefinition, Section};

/// Active fields of one section, in display order.
pub fn active_fields_for_section(
    fields: &[FormFieldDefinition],
    section: Section,
) -> Vec<FormFieldDefinition> {
    let mut out: Vec<_> = fields
        .iter()
        .filter(|f| f.active && f.section == section)
        .cloned()
        .collect();
    out.sort_by_key(|f| (f.order, f.id));
    out
}

/// The document-upload checklist, in display order.
pub fn active_requirements(
    requirements: &[DocumentRequirementDefinition],
) -> Vec<DocumentRequirementDefinition> {
    let mut out: Vec<_> = requirements.iter().filter(|r| r.active).cloned().collect();
    out.sort_by_key(|r| (r.order, r.id));
    out
}

/// Names of required active fields in `section` that have no usable
/// answer yet. Empty result means the student may advance past the step.
pub fn missing_required(
    fields: &[FormFieldDefinition],
    section: Section,
    answers: &HashMap<String, Value>,
) -> Vec<String> {
    active_fields_for_section(fields, section)
        .into_iter()
        .filter(|f| f.required && is_blank(answers.get(&f.name)))
        .map(|f| f.name)
        .collect()
}

/// An answer counts as blank when absent, null, or all-whitespace text.
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldDraft, FieldKind};
    use serde_json::json;

    fn field(id: i32, name: &str, section: Section, order: i32, active: bool) -> FormFieldDefinition {
        FieldDraft {
            name: name.into(),
            label: name.into(),
            kind: FieldKind::Text,
            required: true,
            section,
            order,
            active,
        }
        .into_definition(id)
    }

    #[test]
    fn filters_inactive_and_other_sections() {
        let fields = vec![
            field(1, "a", Section::Personal, 1, true),
            field(2, "b", Section::Personal, 2, false),
            field(3, "c", Section::Contact, 1, true),
        ];
        let view = active_fields_for_section(&fields, Section::Personal);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "a");
    }

    #[test]
    fn sorts_by_order_then_id() {
        let fields = vec![
            field(4, "later", Section::Personal, 1, true),
            field(2, "first", Section::Personal, 1, true),
            field(3, "third", Section::Personal, 2, true),
        ];
        let names: Vec<_> = active_fields_for_section(&fields, Section::Personal)
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, ["first", "later", "third"]);
    }

    #[test]
    fn ordering_is_non_decreasing() {
        let fields = vec![
            field(1, "a", Section::Course, 3, true),
            field(2, "b", Section::Course, 1, true),
            field(3, "c", Section::Course, 3, true),
            field(4, "d", Section::Course, 2, true),
        ];
        let view = active_fields_for_section(&fields, Section::Course);
        for pair in view.windows(2) {
            assert!((pair[0].order, pair[0].id) < (pair[1].order, pair[1].id));
        }
    }

    #[test]
    fn missing_required_ignores_optional_and_answered() {
        let mut optional = field(1, "whatsapp", Section::Contact, 1, true);
        optional.required = false;
        let fields = vec![
            optional,
            field(2, "email", Section::Contact, 2, true),
            field(3, "phone", Section::Contact, 3, true),
        ];

        let mut answers = HashMap::new();
        answers.insert("email".to_string(), json!("ana@example.com"));
        answers.insert("phone".to_string(), json!("   "));

        assert_eq!(
            missing_required(&fields, Section::Contact, &answers),
            ["phone"]
        );
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank(None));
        assert!(is_blank(Some(&Value::Null)));
        assert!(is_blank(Some(&json!("  "))));
        assert!(!is_blank(Some(&json!("x"))));
        assert!(!is_blank(Some(&json!(0))));
        assert!(!is_blank(Some(&json!(false))));
    }
}
