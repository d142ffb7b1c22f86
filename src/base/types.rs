use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type Err = anyhow::Error;
pub type Res<T> = Result<T, Err>;
pub type Void = Res<()>;

/// Triage bucket assigned to a single user message.
///
/// Variants are declared in precedence order: when a message matches phrases
/// from several categories, the earliest variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Crisis,
    DeathIdeation,
    PsychologyReferral,
    TherapyReferral,
    SevereOrChronic,
    MildStress,
    General,
}

impl Category {
    /// Categories that are backed by a keyword set, highest precedence first.
    ///
    /// `General` is absent because it is the fallback when nothing matches.
    pub const PRECEDENCE: [Category; 6] = [
        Category::Crisis,
        Category::DeathIdeation,
        Category::PsychologyReferral,
        Category::TherapyReferral,
        Category::SevereOrChronic,
        Category::MildStress,
    ];

    /// Whether a reply in this category should steer toward a professional.
    pub fn needs_professional_help(self) -> bool {
        !matches!(self, Category::MildStress | Category::General)
    }

    /// Whether the emergency panel should be shown alongside the reply.
    pub fn shows_crisis_card(self) -> bool {
        matches!(self, Category::Crisis | Category::DeathIdeation)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Crisis => "crisis",
            Category::DeathIdeation => "death-ideation",
            Category::PsychologyReferral => "psychology-referral",
            Category::TherapyReferral => "therapy-referral",
            Category::SevereOrChronic => "severe-or-chronic",
            Category::MildStress => "mild-stress",
            Category::General => "general",
        };

        f.write_str(name)
    }
}

/// Language tag for keyword phrases and crisis-card copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    En,
    PtBr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::PtBr];
}

/// The structured outcome of classifying one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageResult {
    pub category: Category,
    pub needs_professional_help: bool,
    pub response_text: String,
    pub suggestions: Vec<String>,
    pub show_crisis_card: bool,
}

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// One line of the conversation.
///
/// User entries never carry a triage result; assistant replies always do,
/// except the opening greeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triage: Option<TriageResult>,
}

impl TranscriptEntry {
    pub fn user(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            sender: Sender::User,
            timestamp: Utc::now(),
            triage: None,
        }
    }

    pub fn greeting(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            sender: Sender::Assistant,
            timestamp: Utc::now(),
            triage: None,
        }
    }

    pub fn reply(id: u64, triage: TriageResult) -> Self {
        Self {
            id,
            text: triage.response_text.clone(),
            sender: Sender::Assistant,
            timestamp: Utc::now(),
            triage: Some(triage),
        }
    }
}

/// The name and title a scheduling request is pre-filled with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialistRef {
    pub name: String,
    pub title: String,
}
