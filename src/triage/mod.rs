//! Message triage: keyword classification, suggestion actions, and the crisis card.
//!
//! The [`Classifier`] is a pure function of its input and the static keyword
//! and template tables, so it can be shared freely and tested on its own.

pub mod crisis;
pub mod suggestion;
pub mod taxonomy;

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::base::{
    templates,
    types::{Category, Locale, TriageResult},
};

use self::taxonomy::{KeywordSet, normalize};

/// A keyword match found by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub category: Category,
    pub phrase: &'static str,
}

/// Keyword classifier for incoming messages.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Debug, Clone)]
pub struct Classifier {
    sets: Arc<[KeywordSet]>,
}

impl Classifier {
    /// Build a classifier over the union of phrases from `locales`.
    pub fn new(locales: &[Locale]) -> Self {
        let sets = Category::PRECEDENCE.iter().map(|&category| KeywordSet::build(category, locales)).collect();

        Self { sets }
    }

    /// The keyword sets in precedence order.
    pub fn keyword_sets(&self) -> &[KeywordSet] {
        &self.sets
    }

    /// Find the highest-precedence category with a phrase contained in `message`.
    ///
    /// Precedence is decided by category order, never by where in the text a
    /// phrase appears.
    pub fn find_match(&self, message: &str) -> Option<Match> {
        let normalized = normalize(message);

        self.sets.iter().find_map(|set| set.find(&normalized).map(|phrase| Match { category: set.category(), phrase }))
    }

    /// Classify a message into a triage result. Never fails: a message with no
    /// known phrase is `General`.
    #[instrument(skip_all)]
    pub fn classify(&self, message: &str) -> TriageResult {
        let category = match self.find_match(message) {
            Some(Match { category, phrase }) => {
                debug!("Matched `{}` as {}.", phrase, category);
                category
            }
            None => {
                debug!("No keyword matched; falling back to {}.", Category::General);
                Category::General
            }
        };

        build_result(category)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&Locale::ALL)
    }
}

/// Assemble the fixed reply for a category.
pub fn build_result(category: Category) -> TriageResult {
    let template = templates::reply_for(category);

    TriageResult {
        category,
        needs_professional_help: category.needs_professional_help(),
        response_text: template.response.to_string(),
        suggestions: template.suggestions.iter().map(|s| s.to_string()).collect(),
        show_crisis_card: category.shows_crisis_card(),
    }
}
