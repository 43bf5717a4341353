//! Default configuration installed on first run.
//!
//! The option catalogs live here as configuration data; the renderer
//! receives them inside the field records instead of keeping per-name
//! switch tables.

use crate::model::{FieldDraft, FieldKind, FieldOption, RequirementDraft, Section};

/// The stock registration form: 9 personal, 5 contact, 4 course fields.
pub fn default_form_fields() -> Vec<FieldDraft> {
    let mut fields = Vec::with_capacity(18);

    let mut push = |name: &str, label: &str, kind: FieldKind, required, section, order| {
        fields.push(FieldDraft {
            name: name.into(),
            label: label.into(),
            kind,
            required,
            section,
            order,
            active: true,
        });
    };

    use FieldKind::*;
    use Section::*;

    push("fullName", "Nome Completo", Text, true, Personal, 1);
    push("cpf", "CPF", Text, true, Personal, 2);
    push("rg", "RG", Text, true, Personal, 3);
    push("birthDate", "Data de Nascimento", Date, true, Personal, 4);
    push("gender", "Gênero", Select { options: gender_options() }, true, Personal, 5);
    push("address", "Endereço", Text, true, Personal, 6);
    push("city", "Cidade", Text, true, Personal, 7);
    push("state", "Estado", Select { options: state_options() }, true, Personal, 8);
    push("zipCode", "CEP", Text, true, Personal, 9);

    push("email", "Email", Email, true, Contact, 1);
    push("phone", "Telefone Celular", Tel, true, Contact, 2);
    push("whatsapp", "WhatsApp", Tel, false, Contact, 3);
    push("emergencyContact", "Nome do Contato de Emergência", Text, false, Contact, 4);
    push("emergencyPhone", "Telefone de Emergência", Tel, false, Contact, 5);

    push("course", "Curso Desejado", Select { options: course_options() }, true, Course, 1);
    push("shift", "Turno", Radio { options: shift_options() }, true, Course, 2);
    push("modality", "Modalidade", Radio { options: modality_options() }, true, Course, 3);
    push("additionalInfo", "Informações Adicionais", Textarea, false, Course, 4);

    fields
}

/// The stock document-upload checklist.
pub fn default_document_requirements() -> Vec<RequirementDraft> {
    let requirement = |name: &str, description: &str, order| RequirementDraft {
        name: name.into(),
        description: Some(description.into()),
        required: true,
        active: true,
        order,
    };

    vec![
        requirement("RG (frente e verso)", "Documento de identidade com foto", 1),
        requirement("CPF", "Cadastro de Pessoa Física", 2),
        requirement(
            "Comprovante de Residência",
            "Conta de água, luz ou telefone (últimos 3 meses)",
            3,
        ),
        requirement(
            "Certificado de Conclusão do Ensino Médio",
            "Documento oficial que comprove a conclusão do ensino médio",
            4,
        ),
        requirement("Foto 3x4 recente", "Foto colorida com fundo branco", 5),
    ]
}

fn gender_options() -> Vec<FieldOption> {
    vec![
        FieldOption::new("masculino", "Masculino"),
        FieldOption::new("feminino", "Feminino"),
        FieldOption::new("outro", "Outro"),
        FieldOption::new("nao_informar", "Prefiro não informar"),
    ]
}

fn course_options() -> Vec<FieldOption> {
    vec![
        FieldOption::new("administracao", "Administração"),
        FieldOption::new("engenharia", "Engenharia"),
        FieldOption::new("medicina", "Medicina"),
        FieldOption::new("direito", "Direito"),
        FieldOption::new("computacao", "Ciência da Computação"),
    ]
}

fn shift_options() -> Vec<FieldOption> {
    vec![
        FieldOption::new("manha", "Manhã"),
        FieldOption::new("tarde", "Tarde"),
        FieldOption::new("noite", "Noite"),
    ]
}

fn modality_options() -> Vec<FieldOption> {
    vec![
        FieldOption::new("presencial", "Presencial"),
        FieldOption::new("semipresencial", "Semipresencial"),
        FieldOption::new("ead", "EAD"),
    ]
}

/// The 27 federative units, keyed by their two-letter abbreviation.
fn state_options() -> Vec<FieldOption> {
    [
        ("AC", "Acre"),
        ("AL", "Alagoas"),
        ("AP", "Amapá"),
        ("AM", "Amazonas"),
        ("BA", "Bahia"),
        ("CE", "Ceará"),
        ("DF", "Distrito Federal"),
        ("ES", "Espírito Santo"),
        ("GO", "Goiás"),
        ("MA", "Maranhão"),
        ("MT", "Mato Grosso"),
        ("MS", "Mato Grosso do Sul"),
        ("MG", "Minas Gerais"),
        ("PA", "Pará"),
        ("PB", "Paraíba"),
        ("PR", "Paraná"),
        ("PE", "Pernambuco"),
        ("PI", "Piauí"),
        ("RJ", "Rio de Janeiro"),
        ("RN", "Rio Grande do Norte"),
        ("RS", "Rio Grande do Sul"),
        ("RO", "Rondônia"),
        ("RR", "Roraima"),
        ("SC", "Santa Catarina"),
        ("SP", "São Paulo"),
        ("SE", "Sergipe"),
        ("TO", "Tocantins"),
    ]
    .into_iter()
    .map(|(value, label)| FieldOption::new(value, label))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_form_has_expected_section_counts() {
        let fields = default_form_fields();
        let count = |section| fields.iter().filter(|f| f.section == section).count();
        assert_eq!(count(Section::Personal), 9);
        assert_eq!(count(Section::Contact), 5);
        assert_eq!(count(Section::Course), 4);
    }

    #[test]
    fn stock_checklist_has_five_required_entries() {
        let requirements = default_document_requirements();
        assert_eq!(requirements.len(), 5);
        assert!(requirements.iter().all(|r| r.required && r.active));
    }

    #[test]
    fn field_names_are_unique() {
        let fields = default_form_fields();
        let mut names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), fields.len());
    }

    #[test]
    fn choice_fields_carry_their_catalogs() {
        let fields = default_form_fields();
        let options = |name: &str| {
            fields
                .iter()
                .find(|f| f.name == name)
                .and_then(|f| f.kind.options())
                .map(<[FieldOption]>::len)
        };
        assert_eq!(options("state"), Some(27));
        assert_eq!(options("gender"), Some(4));
        assert_eq!(options("course"), Some(5));
        assert_eq!(options("shift"), Some(3));
        assert_eq!(options("modality"), Some(3));
        assert_eq!(options("fullName"), None);
    }
}
