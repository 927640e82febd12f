//! Match classifier
//!
//! Turns a `MatchResult` into a storage category and file name. Pure: the
//! caller creates directories and writes files.

use std::sync::Arc;

use crate::core::patterns::{NamingScheme, PatternRuleSet};
use crate::models::types::{Classification, MatchResult};
use crate::utils::constants::MATCH_FILE_EXTENSION;

/// Computes category and file name for matches of a rule set
#[derive(Debug, Clone)]
pub struct MatchClassifier {
    rules: Arc<PatternRuleSet>,
}

impl MatchClassifier {
    pub fn new(rules: Arc<PatternRuleSet>) -> Self {
        Self { rules }
    }

    /// Category is the rule name. Length-prefixed names re-apply the rule to
    /// the address to recover the matched suffix; if that comes back empty or
    /// rejects, the name degrades to `0_{address}` instead of failing.
    pub fn classify(&self, address: &str, result: &MatchResult) -> Classification {
        let rule = self.rules.get(&result.rule_name);

        let display_name = rule
            .map(|rule| rule.label.clone())
            .unwrap_or_else(|| result.rule_name.clone());

        let filename = match rule.map(|rule| rule.naming) {
            Some(NamingScheme::AddressOnly) => {
                format!("{}.{}", address, MATCH_FILE_EXTENSION)
            }
            Some(NamingScheme::LengthPrefixed) => {
                let matched = rule.and_then(|rule| rule.capture(address)).unwrap_or("");
                length_prefixed(matched, address)
            }
            // produced by another rule set, trust the recorded text
            None => length_prefixed(&result.matched_substring, address),
        };

        Classification {
            category: result.rule_name.clone(),
            filename,
            display_name,
        }
    }
}

/// `{len}{matched}_{address}.json`, length counted in characters
fn length_prefixed(matched: &str, address: &str) -> String {
    format!(
        "{}{}_{}.{}",
        matched.chars().count(),
        matched,
        address,
        MATCH_FILE_EXTENSION
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::patterns::Rule;

    fn classifier() -> MatchClassifier {
        MatchClassifier::new(Arc::new(PatternRuleSet::standard()))
    }

    fn result(rule: &str, matched: &str, address: &str) -> MatchResult {
        MatchResult {
            rule_name: rule.to_string(),
            matched_substring: matched.to_string(),
            address: address.to_string(),
        }
    }

    #[test]
    fn test_run_filename_has_length_prefix() {
        let address = "TXyZ9KjRmN2bSvKLqP3wQxYzMnHcEEEEE";
        let set = PatternRuleSet::standard();
        let found = set.evaluate(address).unwrap();

        let class = classifier().classify(address, &found);
        assert_eq!(class.category, "Uppercase-run");
        assert_eq!(class.filename, "5EEEEE_TXyZ9KjRmN2bSvKLqP3wQxYzMnHcEEEEE.json");
        assert_eq!(class.display_name, "uppercase letter run");
    }

    #[test]
    fn test_ascending_filename_is_address_only() {
        let address = "TXyZ9KjRmN2bSvKLqP3wQxYzMnH56789";
        let class = classifier().classify(address, &result("Ascending-digits", "", address));
        assert_eq!(class.category, "Ascending-digits");
        assert_eq!(class.filename, "TXyZ9KjRmN2bSvKLqP3wQxYzMnH56789.json");
    }

    #[test]
    fn test_word_rule_uses_literal_from_address() {
        let address = "TXyZ9KjRmN2bSvKLqP3wQxYzWHALEPAY";
        let class = classifier().classify(address, &result("whalepay", "ignored", address));
        assert_eq!(class.category, "whalepay");
        assert_eq!(class.filename, "8WHALEPAY_TXyZ9KjRmN2bSvKLqP3wQxYzWHALEPAY.json");
    }

    #[test]
    fn test_substring_is_rederived_not_copied() {
        let address = "TXyZ9KjRmN2bSvKLqP3wQxYzMn1111111";
        let class = classifier().classify(address, &result("Digit-run", "11111", address));
        assert_eq!(class.filename, "71111111_TXyZ9KjRmN2bSvKLqP3wQxYzMn1111111.json");
    }

    #[test]
    fn test_rederivation_failure_degrades_to_empty() {
        let address = "TXyZ9KjRmN2bSvKLqP3wQxYzMnHc4Vu8tD";
        let class = classifier().classify(address, &result("pddo", "PDDO", address));
        assert_eq!(class.category, "pddo");
        assert_eq!(class.filename, "0_TXyZ9KjRmN2bSvKLqP3wQxYzMnHc4Vu8tD.json");
    }

    #[test]
    fn test_predicate_with_length_prefix_uses_empty_substring() {
        let rules = PatternRuleSet::new(vec![Rule::predicate(
            "custom",
            "custom double",
            NamingScheme::LengthPrefixed,
            |_| true,
        )])
        .unwrap();
        let classifier = MatchClassifier::new(Arc::new(rules));

        let class = classifier.classify("TAbc", &result("custom", "", "TAbc"));
        assert_eq!(class.filename, "0_TAbc.json");
        assert_eq!(class.display_name, "custom double");
    }

    #[test]
    fn test_unknown_rule_falls_back_to_recorded_substring() {
        let class = classifier().classify("TAbcZZZZZ", &result("legacy", "ZZZZZ", "TAbcZZZZZ"));
        assert_eq!(class.category, "legacy");
        assert_eq!(class.filename, "5ZZZZZ_TAbcZZZZZ.json");
        assert_eq!(class.display_name, "legacy");
    }
}
