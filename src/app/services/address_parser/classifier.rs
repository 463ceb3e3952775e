//! Address pattern classification
//!
//! Decides whether a raw address string looks like a street address, a
//! lot/block legal description, or neither. Classification is a cheap
//! shape check; the parsers do the real field validation afterwards.

use regex::Regex;

use crate::app::models::AddressClass;
use crate::config::AddressVocabulary;

/// Classifier for raw address text.
///
/// Built once per run from the configured vocabulary; holds its compiled
/// pattern rather than relying on any process-wide state.
#[derive(Debug)]
pub struct AddressClassifier {
    vocabulary: AddressVocabulary,
    lot_block: Regex,
}

impl AddressClassifier {
    /// Create a classifier over the given vocabulary
    pub fn new(vocabulary: AddressVocabulary) -> Self {
        // Keyword followed by an integer, anchored at the start. The pattern
        // is static, so compilation cannot fail at runtime.
        let lot_block = Regex::new(r"(?i)^\s*(lot|block)\s+\d+\b")
            .expect("lot/block pattern is a valid regex");
        Self {
            vocabulary,
            lot_block,
        }
    }

    /// Classify a raw address string.
    ///
    /// Matching normalizes whitespace and case internally; the input string
    /// itself is never modified and flows to the parsers as-is. Empty or
    /// whitespace-only text is `Unrecognized`.
    pub fn classify(&self, text: &str) -> AddressClass {
        if self.lot_block.is_match(text) {
            return AddressClass::LotBlock;
        }
        if self.is_street_shaped(text) {
            return AddressClass::Street;
        }
        AddressClass::Unrecognized
    }

    /// Shape check for `<number> <name...> <suffix>`.
    ///
    /// The final token must be a vocabulary suffix or a short (1-3 digit)
    /// number, which covers numbered routes like `"1401 Highway 161"`.
    fn is_street_shaped(&self, text: &str) -> bool {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() < 3 {
            return false;
        }

        let leading_number = tokens[0].parse::<u32>().map(|n| n > 0).unwrap_or(false);
        if !leading_number {
            return false;
        }

        let last = tokens[tokens.len() - 1];
        let valid_suffix = self.vocabulary.canonical_suffix(last).is_some()
            || is_short_number(last);
        if !valid_suffix {
            return false;
        }

        // At least one name-like token between the number and the suffix
        tokens[1..tokens.len() - 1]
            .iter()
            .any(|t| is_name_token(t, &self.vocabulary))
    }

    /// Access to the vocabulary the classifier was built from
    pub fn vocabulary(&self) -> &AddressVocabulary {
        &self.vocabulary
    }
}

/// 1-3 digit number, accepted as a numbered-street suffix
pub(crate) fn is_short_number(token: &str) -> bool {
    token.len() <= 3 && !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

fn is_name_token(token: &str, vocabulary: &AddressVocabulary) -> bool {
    vocabulary.is_directional(token)
        || token
            .chars()
            .any(|c| c.is_ascii_alphabetic())
}
