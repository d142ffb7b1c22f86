//! Action inference for suggestion chips.

use serde::{Deserialize, Serialize};

/// Label fragments that turn a chip into a scheduling request.
const SCHEDULE_MARKERS: [&str; 3] = ["find", "schedule", "call"];

/// Label fragments that mark a follow-up as a coping tip.
const TIP_MARKERS: [&str; 2] = ["coping", "strategies"];

/// What selecting a suggestion chip does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionAction {
    /// Hand off to the scheduling collaborator.
    Schedule,
    /// Put the label into the input field as the next message.
    FollowUp,
}

impl SuggestionAction {
    /// Infer the action from the label text.
    pub fn infer(label: &str) -> Self {
        let label = label.to_lowercase();

        if SCHEDULE_MARKERS.iter().any(|marker| label.contains(marker)) {
            SuggestionAction::Schedule
        } else {
            SuggestionAction::FollowUp
        }
    }
}

/// How a chip is decorated when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipStyle {
    Calendar,
    Tip,
    Support,
}

impl ChipStyle {
    pub fn for_label(label: &str) -> Self {
        if SuggestionAction::infer(label) == SuggestionAction::Schedule {
            return ChipStyle::Calendar;
        }

        let label = label.to_lowercase();

        if TIP_MARKERS.iter().any(|marker| label.contains(marker)) {
            ChipStyle::Tip
        } else {
            ChipStyle::Support
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheduling_labels() {
        assert_eq!(SuggestionAction::infer("Find emergency support"), SuggestionAction::Schedule);
        assert_eq!(SuggestionAction::infer("Schedule urgent appointment"), SuggestionAction::Schedule);
        assert_eq!(SuggestionAction::infer("Call crisis specialist"), SuggestionAction::Schedule);
        assert_eq!(SuggestionAction::infer("please find someone"), SuggestionAction::Schedule);
    }

    #[test]
    fn conversational_labels() {
        assert_eq!(SuggestionAction::infer("Crisis helpline numbers"), SuggestionAction::FollowUp);
        assert_eq!(SuggestionAction::infer("Tell me more"), SuggestionAction::FollowUp);
        assert_eq!(SuggestionAction::infer("Improve sleep hygiene"), SuggestionAction::FollowUp);
    }

    #[test]
    fn chip_styles() {
        assert_eq!(ChipStyle::for_label("Find a therapist"), ChipStyle::Calendar);
        assert_eq!(ChipStyle::for_label("Explore coping strategies"), ChipStyle::Tip);
        assert_eq!(ChipStyle::for_label("Practice mindfulness"), ChipStyle::Support);
    }
}
