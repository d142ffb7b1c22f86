//! Keyword taxonomy: locale-tagged phrase groups for each triage category.
//!
//! A category may own several groups per locale (`SevereOrChronic` has an
//! acute and a chronic group). At build time the groups for the active
//! locales are unioned into one [`KeywordSet`] per category.

use std::collections::BTreeSet;

use crate::base::types::{Category, Locale};

/// A static list of phrases for one category in one language.
#[derive(Debug, Clone, Copy)]
pub struct KeywordGroup {
    pub category: Category,
    pub locale: Locale,
    /// Short label for the sub-set the group belongs to.
    pub facet: &'static str,
    pub phrases: &'static [&'static str],
}

/// Every phrase the classifier knows about. All phrases are lowercase.
pub const TAXONOMY: &[KeywordGroup] = &[
    // Crisis.
    KeywordGroup {
        category: Category::Crisis,
        locale: Locale::En,
        facet: "self-harm",
        phrases: &[
            "suicide",
            "kill myself",
            "end it all",
            "not worth living",
            "hurt myself",
            "self harm",
            "don't want to live",
            "do not want to live",
            "no reason to live",
        ],
    },
    KeywordGroup {
        category: Category::Crisis,
        locale: Locale::PtBr,
        facet: "self-harm",
        phrases: &[
            "suicídio",
            "suicidio",
            "me matar",
            "acabar com tudo",
            "não vale a pena viver",
            "me machucar",
            "automutilação",
            "não quero mais viver",
        ],
    },
    // Death ideation.
    KeywordGroup {
        category: Category::DeathIdeation,
        locale: Locale::En,
        facet: "death",
        phrases: &["death", "die", "dying", "want to die", "better off dead"],
    },
    KeywordGroup {
        category: Category::DeathIdeation,
        locale: Locale::PtBr,
        facet: "death",
        phrases: &[
            "pensar na morte",
            "penso na morte",
            "a morte",
            "morrer",
            "morrendo",
            "quero morrer",
            "melhor morto",
            "melhor morta",
        ],
    },
    // Psychology referral.
    KeywordGroup {
        category: Category::PsychologyReferral,
        locale: Locale::En,
        facet: "patterns",
        phrases: &[
            "behavior patterns",
            "cognitive",
            "thinking patterns",
            "phobia",
            "ocd",
            "adhd",
            "autism",
            "personality disorder",
        ],
    },
    KeywordGroup {
        category: Category::PsychologyReferral,
        locale: Locale::PtBr,
        facet: "patterns",
        phrases: &[
            "padrões de comportamento",
            "cognitivo",
            "padrões de pensamento",
            "fobia",
            "transtorno obsessivo",
            "tdah",
            "autismo",
            "transtorno de personalidade",
        ],
    },
    // Therapy referral.
    KeywordGroup {
        category: Category::TherapyReferral,
        locale: Locale::En,
        facet: "life",
        phrases: &["relationship", "family", "couples", "grief", "loss", "addiction"],
    },
    KeywordGroup {
        category: Category::TherapyReferral,
        locale: Locale::PtBr,
        facet: "life",
        phrases: &[
            "relacionamento",
            "família",
            "minha familia",
            "casal",
            "de luto",
            "em luto",
            "perda",
            "vício",
            "dependência química",
        ],
    },
    // Severe or chronic: either sub-set triggers the category.
    KeywordGroup {
        category: Category::SevereOrChronic,
        locale: Locale::En,
        facet: "acute",
        phrases: &[
            "severe depression",
            "panic attacks",
            "can't function",
            "completely overwhelmed",
            "breakdown",
            "trauma",
            "ptsd",
        ],
    },
    KeywordGroup {
        category: Category::SevereOrChronic,
        locale: Locale::En,
        facet: "chronic",
        phrases: &["months of", "years of", "always feel", "never feel better", "getting worse"],
    },
    KeywordGroup {
        category: Category::SevereOrChronic,
        locale: Locale::PtBr,
        facet: "acute",
        phrases: &[
            "depressão severa",
            "depressão grave",
            "ataques de pânico",
            "crise de pânico",
            "não consigo funcionar",
            "completamente sobrecarregado",
            "completamente sobrecarregada",
            "colapso",
            "trauma",
            "tept",
        ],
    },
    KeywordGroup {
        category: Category::SevereOrChronic,
        locale: Locale::PtBr,
        facet: "chronic",
        phrases: &["meses de", "anos de", "sempre me sinto", "nunca me sinto melhor", "piorando"],
    },
    // Mild stress.
    KeywordGroup {
        category: Category::MildStress,
        locale: Locale::En,
        facet: "everyday",
        phrases: &["stressed", "tired", "overwhelmed", "anxious about work", "sleep problems", "work stress"],
    },
    KeywordGroup {
        category: Category::MildStress,
        locale: Locale::PtBr,
        facet: "everyday",
        phrases: &[
            "estressado",
            "estressada",
            "cansado",
            "cansada",
            "sobrecarregado",
            "sobrecarregada",
            "ansioso com o trabalho",
            "ansiosa com o trabalho",
            "problemas de sono",
            "estresse no trabalho",
        ],
    },
];

/// Lowercase a message and fold typographic apostrophes so that "can’t"
/// matches "can't". No other punctuation is touched.
pub fn normalize(message: &str) -> String {
    message.to_lowercase().replace(['\u{2019}', '\u{2018}'], "'")
}

/// The union of one category's phrases across a set of locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    category: Category,
    phrases: Vec<&'static str>,
}

impl KeywordSet {
    /// Build the set for `category` from every group whose locale is active.
    pub fn build(category: Category, locales: &[Locale]) -> Self {
        let phrases: BTreeSet<&'static str> = TAXONOMY
            .iter()
            .filter(|group| group.category == category && locales.contains(&group.locale))
            .flat_map(|group| group.phrases.iter().copied())
            .collect();

        Self {
            category,
            phrases: phrases.into_iter().collect(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn phrases(&self) -> &[&'static str] {
        &self.phrases
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Find the first phrase contained in an already-normalized message.
    pub fn find(&self, normalized: &str) -> Option<&'static str> {
        self.phrases.iter().copied().find(|phrase| normalized.contains(phrase))
    }
}
