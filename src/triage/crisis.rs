//! The emergency panel shown next to crisis replies.

use serde::{Deserialize, Serialize};

use crate::base::{
    templates::{self, CrisisCopy},
    types::{Locale, SpecialistRef},
};

/// A crisis specialist listed on the card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specialist {
    pub id: String,
    pub name: String,
    pub title: String,
    pub specialties: Vec<String>,
    pub rating: f32,
    pub reviews: u32,
    pub location: String,
    pub availability: String,
    pub phone: String,
    pub emergency_available: bool,
}

impl Specialist {
    /// The name and title a scheduling request carries.
    pub fn reference(&self) -> SpecialistRef {
        SpecialistRef {
            name: self.name.clone(),
            title: self.title.clone(),
        }
    }

    /// Initials for an avatar placeholder.
    pub fn initials(&self) -> String {
        self.name.split_whitespace().filter_map(|word| word.chars().next()).collect()
    }
}

#[allow(clippy::too_many_arguments)]
fn specialist(id: &str, name: &str, title: &str, specialties: &[&str], rating: f32, reviews: u32, location: &str, availability: &str, phone: &str) -> Specialist {
    Specialist {
        id: id.to_string(),
        name: name.to_string(),
        title: title.to_string(),
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
        rating,
        reviews,
        location: location.to_string(),
        availability: availability.to_string(),
        phone: phone.to_string(),
        emergency_available: true,
    }
}

/// The on-call crisis roster for a display locale.
pub fn roster(locale: Locale) -> Vec<Specialist> {
    match locale {
        Locale::En => vec![
            specialist(
                "crisis-1",
                "Dr. Sarah Johnson",
                "Licensed Clinical Psychologist",
                &["Crisis Intervention", "Anxiety", "Depression", "PTSD"],
                4.9,
                127,
                "Downtown Medical Center",
                "Available for emergency consultations",
                "(555) 123-4567",
            ),
            specialist(
                "crisis-2",
                "Dr. João Silva",
                "Clinical Psychologist",
                &["Suicidal Crisis", "Depression", "Grief"],
                4.8,
                98,
                "Vida Nova Clinic",
                "Immediate care available",
                "(555) 987-6543",
            ),
            specialist(
                "crisis-3",
                "Dr. Ana Souza",
                "Emergency Psychology Specialist",
                &["Emergency", "Anxiety", "Panic"],
                4.7,
                85,
                "Support Institute",
                "24h on call",
                "(555) 222-3344",
            ),
        ],
        Locale::PtBr => vec![
            specialist(
                "crisis-1",
                "Dr. Sarah Johnson",
                "Psicóloga Clínica Licenciada",
                &["Intervenção em Crise", "Ansiedade", "Depressão", "TEPT"],
                4.9,
                127,
                "Centro de Saúde Mental São Paulo - SP",
                "Disponível para consultas de emergência",
                "(555) 123-4567",
            ),
            specialist(
                "crisis-2",
                "Dr. João Silva",
                "Psicólogo Clínico",
                &["Crise Suicida", "Depressão", "Luto"],
                4.8,
                98,
                "Clínica Vida Nova - RJ",
                "Atendimento imediato disponível",
                "(555) 987-6543",
            ),
            specialist(
                "crisis-3",
                "Dra. Ana Souza",
                "Psicóloga Especialista em Emergências",
                &["Emergência", "Ansiedade", "Pânico"],
                4.7,
                85,
                "Instituto Apoio SP",
                "Plantão 24h",
                "(555) 222-3344",
            ),
        ],
    }
}

/// Crisis card with a carousel over the specialist roster.
#[derive(Debug, Clone)]
pub struct CrisisCard {
    copy: &'static CrisisCopy,
    specialists: Vec<Specialist>,
    index: usize,
}

impl CrisisCard {
    pub fn new(locale: Locale) -> Self {
        Self {
            copy: templates::crisis_copy(locale),
            specialists: roster(locale),
            index: 0,
        }
    }

    pub fn copy(&self) -> &'static CrisisCopy {
        self.copy
    }

    /// Hotline text, rendered verbatim.
    pub fn resources(&self) -> &'static str {
        self.copy.resources
    }

    pub fn current(&self) -> &Specialist {
        &self.specialists[self.index]
    }

    pub fn show_next(&mut self) -> &Specialist {
        self.index = (self.index + 1) % self.specialists.len();
        self.current()
    }

    pub fn show_prev(&mut self) -> &Specialist {
        self.index = (self.index + self.specialists.len() - 1) % self.specialists.len();
        self.current()
    }

    /// One-based position and roster size, e.g. `(2, 3)`.
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.specialists.len())
    }

    pub fn position_label(&self) -> String {
        let (n, total) = self.position();
        format!("{} {} {}", n, self.copy.position_word, total)
    }
}

/// Turn a display number into a `tel:` URI.
pub fn dial_uri(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{digits}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_wraps_both_ways() {
        let mut card = CrisisCard::new(Locale::En);

        assert_eq!(card.position(), (1, 3));
        assert_eq!(card.show_prev().id, "crisis-3");
        assert_eq!(card.show_next().id, "crisis-1");
        card.show_next();
        card.show_next();
        assert_eq!(card.show_next().id, "crisis-1");
    }

    #[test]
    fn localized_copy() {
        let english = CrisisCard::new(Locale::En);
        let portuguese = CrisisCard::new(Locale::PtBr);

        assert!(english.resources().contains("988"));
        assert!(portuguese.resources().contains("188"));
        assert_eq!(portuguese.position_label(), "1 de 3");
        assert_eq!(portuguese.current().title, "Psicóloga Clínica Licenciada");
    }

    #[test]
    fn reference_and_initials() {
        let card = CrisisCard::new(Locale::En);
        let current = card.current();

        assert_eq!(
            current.reference(),
            SpecialistRef {
                name: "Dr. Sarah Johnson".to_string(),
                title: "Licensed Clinical Psychologist".to_string()
            }
        );
        assert_eq!(current.initials(), "DSJ");
    }

    #[test]
    fn dial_uri_strips_whitespace() {
        assert_eq!(dial_uri("(555) 123-4567"), "tel:(555)123-4567");
    }
}
