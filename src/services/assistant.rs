//! Scripted assistant
//!
//! Messages are classified into a closed set of intents and each intent maps
//! to one canned reply. Classification and reply content are separate: a
//! different `IntentClassifier` can be plugged into `Assistant` without
//! touching the `ResponseCatalog`, and the other way around.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Recognized user intents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Questions about where money went
    SpendingInsight,
    /// Questions about saving or goals
    SavingsAdvice,
    /// Questions about budget limits
    BudgetHelp,
    /// Anything else
    Fallback,
}

impl Intent {
    pub fn all() -> &'static [Self] {
        &[
            Self::SpendingInsight,
            Self::SavingsAdvice,
            Self::BudgetHelp,
            Self::Fallback,
        ]
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SpendingInsight => "spending insight",
            Self::SavingsAdvice => "savings advice",
            Self::BudgetHelp => "budget help",
            Self::Fallback => "fallback",
        };
        write!(f, "{}", name)
    }
}

/// Maps a free-text message to an intent
pub trait IntentClassifier {
    fn classify(&self, message: &str) -> Intent;
}

/// Keyword rule set; the first rule with a matching word wins
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    rules: Vec<(Intent, Vec<String>)>,
}

impl KeywordClassifier {
    /// An empty classifier; every message falls back
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule. Keywords are matched case-insensitively against whole words.
    pub fn with_rule<I, S>(mut self, intent: Intent, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .collect();
        self.rules.push((intent, keywords));
        self
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::empty()
            .with_rule(
                Intent::SpendingInsight,
                ["spend", "spent", "spending", "expense", "expenses"],
            )
            .with_rule(
                Intent::SavingsAdvice,
                ["save", "saving", "savings", "goal", "goals"],
            )
            .with_rule(
                Intent::BudgetHelp,
                ["budget", "budgets", "limit", "limits", "overspent"],
            )
    }
}

impl IntentClassifier for KeywordClassifier {
    fn classify(&self, message: &str) -> Intent {
        let lowered = message.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        self.rules
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| words.contains(&k.as_str())))
            .map(|(intent, _)| *intent)
            .unwrap_or(Intent::Fallback)
    }
}

/// Canned reply text per intent
#[derive(Debug, Clone)]
pub struct ResponseCatalog {
    spending: String,
    savings: String,
    budget: String,
    fallback: String,
}

impl ResponseCatalog {
    pub fn response(&self, intent: Intent) -> &str {
        match intent {
            Intent::SpendingInsight => &self.spending,
            Intent::SavingsAdvice => &self.savings,
            Intent::BudgetHelp => &self.budget,
            Intent::Fallback => &self.fallback,
        }
    }
}

impl Default for ResponseCatalog {
    fn default() -> Self {
        Self {
            spending: "You're spending 23% less on dining this month. Most of your spending \
                       goes to shopping and dining; try `socialfin budget` for the breakdown."
                .into(),
            savings: "Setting aside a fixed amount right after payday is the easiest way to \
                      hit a savings goal. Small automatic transfers add up quickly."
                .into(),
            budget: "Your budget tracks spend against a limit per category. Categories over \
                     their limit are flagged in `socialfin budget`."
                .into(),
            fallback: "I can help with spending, savings and budgets. Try asking \
                       \"How much did I spend?\""
                .into(),
        }
    }
}

/// A classified reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub intent: Intent,
    pub text: String,
}

/// Classifies a message and looks up the matching reply
pub struct Assistant<C: IntentClassifier = KeywordClassifier> {
    classifier: C,
    responses: ResponseCatalog,
}

impl Assistant<KeywordClassifier> {
    pub fn new() -> Self {
        Self::with_classifier(KeywordClassifier::default())
    }
}

impl Default for Assistant<KeywordClassifier> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: IntentClassifier> Assistant<C> {
    pub fn with_classifier(classifier: C) -> Self {
        Self {
            classifier,
            responses: ResponseCatalog::default(),
        }
    }

    pub fn reply(&self, message: &str) -> Reply {
        let intent = self.classifier.classify(message);
        tracing::debug!(%intent, "classified assistant message");
        Reply {
            intent,
            text: self.responses.response(intent).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classification() {
        let classifier = KeywordClassifier::default();
        assert_eq!(
            classifier.classify("How much did I spend?"),
            Intent::SpendingInsight
        );
        assert_eq!(
            classifier.classify("Help me SAVE for a trip"),
            Intent::SavingsAdvice
        );
        assert_eq!(
            classifier.classify("Am I over my budget?"),
            Intent::BudgetHelp
        );
        assert_eq!(classifier.classify("hello there"), Intent::Fallback);
        assert_eq!(classifier.classify(""), Intent::Fallback);
    }

    #[test]
    fn test_whole_word_matching() {
        // "savvy" must not match "save", "budgeting" is not a listed keyword
        let classifier = KeywordClassifier::default();
        assert_eq!(classifier.classify("I'm savvy"), Intent::Fallback);
        assert_eq!(classifier.classify("budgeting tips"), Intent::Fallback);
    }

    #[test]
    fn test_first_rule_wins() {
        let classifier = KeywordClassifier::default();
        assert_eq!(
            classifier.classify("my budget and what I spent"),
            Intent::SpendingInsight
        );
    }

    #[test]
    fn test_custom_classifier() {
        struct Always(Intent);
        impl IntentClassifier for Always {
            fn classify(&self, _message: &str) -> Intent {
                self.0
            }
        }

        let assistant = Assistant::with_classifier(Always(Intent::BudgetHelp));
        let reply = assistant.reply("anything");
        assert_eq!(reply.intent, Intent::BudgetHelp);
        assert_eq!(reply.text, ResponseCatalog::default().response(Intent::BudgetHelp));
    }

    #[test]
    fn test_every_intent_has_distinct_reply() {
        let catalog = ResponseCatalog::default();
        let mut texts: Vec<&str> = Intent::all().iter().map(|i| catalog.response(*i)).collect();
        texts.sort_unstable();
        texts.dedup();
        assert_eq!(texts.len(), 4);
    }

    #[test]
    fn test_empty_classifier_falls_back() {
        assert_eq!(KeywordClassifier::empty().classify("spend"), Intent::Fallback);
    }
}
