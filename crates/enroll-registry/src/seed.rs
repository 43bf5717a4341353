//! Stock course catalog installed on first run.

use crate::model::CourseDraft;

/// Weekday coverage shared by every stock shift.
pub const WEEKDAYS: &str = "seg,ter,qua,qui,sex";

pub fn default_courses() -> Vec<CourseDraft> {
    let course = |name: &str,
                  code: &str,
                  description: &str,
                  duration_months: u32,
                  coordinator: &str,
                  monthly_price: f64| CourseDraft {
        name: name.into(),
        code: code.into(),
        description: description.into(),
        duration_months,
        coordinator: coordinator.into(),
        monthly_price,
        active: true,
    };

    vec![
        course(
            "Administração",
            "ADM",
            "Curso de Administração com ênfase em gestão de negócios e empreendedorismo",
            48,
            "Dra. Ana Silva",
            799.90,
        ),
        course(
            "Engenharia Civil",
            "ENG-CIV",
            "Engenharia Civil com foco em construção sustentável e projetos urbanos",
            60,
            "Dr. Carlos Oliveira",
            1299.90,
        ),
        course(
            "Direito",
            "DIR",
            "Curso de Direito com ênfase em Direito Digital e novas tecnologias",
            60,
            "Dra. Patrícia Mendes",
            1199.90,
        ),
        course(
            "Ciência da Computação",
            "CC",
            "Ciência da Computação com foco em desenvolvimento de software e IA",
            48,
            "Dr. Bruno Costa",
            999.90,
        ),
        course(
            "Medicina",
            "MED",
            "Curso de Medicina com ênfase em saúde pública e tecnologias médicas",
            72,
            "Dra. Márcia Santos",
            5999.90,
        ),
    ]
}

/// `(name, start, end)` of the three standard shifts.
pub fn standard_shifts() -> [(&'static str, &'static str, &'static str); 3] {
    [
        ("Manhã", "08:00", "12:00"),
        ("Tarde", "13:30", "17:30"),
        ("Noite", "19:00", "22:30"),
    ]
}

/// `(name, description)` of the three standard modalities.
pub fn standard_modalities() -> [(&'static str, &'static str); 3] {
    [
        ("Presencial", "Aulas totalmente presenciais"),
        ("Semipresencial", "Aulas presenciais e online"),
        ("EAD", "Ensino à distância com encontros online"),
    ]
}
