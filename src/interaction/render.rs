//! Plain-text rendering of transcript entries and the crisis card.

use std::fmt::Write;

use crate::{
    base::types::{Sender, TranscriptEntry},
    triage::{crisis::CrisisCard, suggestion::ChipStyle},
};

fn chip_glyph(style: ChipStyle) -> &'static str {
    match style {
        ChipStyle::Calendar => "[cal]",
        ChipStyle::Tip => "[tip]",
        ChipStyle::Support => "[<3]",
    }
}

/// Render one entry, its numbered suggestion chips, and a crisis marker.
pub fn entry(entry: &TranscriptEntry) -> String {
    let who = match entry.sender {
        Sender::User => "you",
        Sender::Assistant => "psycare",
    };

    let mut out = format!("{} {}> {}", entry.timestamp.format("%H:%M"), who, entry.text);

    if let Some(triage) = &entry.triage {
        for (n, label) in triage.suggestions.iter().enumerate() {
            let _ = write!(out, "\n    {}. {} {}", n + 1, chip_glyph(ChipStyle::for_label(label)), label);
        }
    }

    out
}

/// Render the crisis card with the specialist currently on display.
pub fn crisis_card(card: &CrisisCard) -> String {
    let copy = card.copy();
    let specialist = card.current();
    let specialties = specialist.specialties.iter().take(3).cloned().collect::<Vec<_>>().join(", ");

    let mut out = String::new();

    let _ = writeln!(out, "  +-- !! {}", copy.heading);
    let _ = writeln!(out, "  | {}", copy.message);
    let _ = writeln!(out, "  | ({}) {} - {}", specialist.initials(), specialist.name, specialist.title);
    let _ = writeln!(out, "  | * {} ({} reviews) | {}", specialist.rating, specialist.reviews, specialist.location);
    let _ = write!(out, "  | {} | tel {}", specialist.availability, specialist.phone);
    if specialist.emergency_available {
        let _ = write!(out, " [{}]", copy.emergency_label);
    }
    out.push('\n');
    let _ = writeln!(out, "  | {specialties}");
    let _ = writeln!(out, "  | /call {} | /book {}", copy.call_label, copy.book_label);
    let _ = writeln!(out, "  | {}: {}", copy.resources_label, card.resources());
    let _ = write!(out, "  +-- /prev {} /next", card.position_label());

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{base::types::Locale, triage::build_result};

    #[test]
    fn entry_lists_numbered_chips() {
        let reply = TranscriptEntry::reply(2, build_result(crate::base::types::Category::General));
        let text = entry(&reply);

        assert!(text.contains("psycare> Thank you for sharing"));
        assert!(text.contains("1. [<3] Tell me more"));
        assert!(text.contains("2. [tip] Explore coping strategies"));
        assert!(text.contains("4. [cal] Find mental health support"));
    }

    #[test]
    fn crisis_card_shows_hotlines_and_position() {
        let card = CrisisCard::new(Locale::En);
        let text = crisis_card(&card);

        assert!(text.contains("Dr. Sarah Johnson"));
        assert!(text.contains("988 Suicide & Crisis Lifeline"));
        assert!(text.contains("1 of 3"));
    }

    #[test]
    fn crisis_card_shows_phone_and_emergency_badge() {
        let mut card = CrisisCard::new(Locale::PtBr);
        card.show_next();
        let text = crisis_card(&card);

        assert!(text.contains("Atendimento imediato disponível | tel (555) 987-6543 [Atende emergências]"));
        assert!(text.contains("2 de 3"));
    }
}
