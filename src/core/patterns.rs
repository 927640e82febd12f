//! Pattern rule set
//!
//! An ordered table of named rules evaluated against a base58 address.
//! Every rule is anchored at the end of the address. Rules are either a
//! compiled suffix matcher or a plain predicate; dispatch is a `match` on
//! the variant.
//!
//! Tie-break: when several rules accept the same address the LAST one in
//! table order wins. This is not a severity ranking. A fixed word such as
//! `PDDO` would lose to a later generic rule if one were ever appended.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

use crate::core::ascending::is_ascending_suffix;
use crate::models::errors::{AppError, AppResult, ErrorCode};
use crate::models::types::MatchResult;
use crate::utils::constants::{
    MIN_RUN_LEN, RULE_ASCENDING_DIGITS, RULE_DIGIT_RUN, RULE_LOWERCASE_RUN, RULE_PDDO,
    RULE_UPPERCASE_RUN, RULE_WHALEPAY,
};

lazy_static! {
    static ref WHALEPAY_SUFFIX: Regex =
        Regex::new(r"(?i)whalepay$").expect("whalepay pattern is valid");
    static ref PDDO_SUFFIX: Regex = Regex::new(r"PDDO$").expect("PDDO pattern is valid");
}

/// Character class for repeated-run matchers (ASCII only)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
}

impl CharClass {
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        match self {
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Digit => c.is_ascii_digit(),
        }
    }
}

/// Compiled matcher anchored at the end of the input
#[derive(Debug, Clone)]
pub enum SuffixMatcher {
    /// `min_len` or more copies of one character from `class`
    RepeatedRun { class: CharClass, min_len: usize },
    /// Regular expression; only matches ending at the string end count
    Pattern(Regex),
}

impl SuffixMatcher {
    /// Matched suffix, or `None` when the matcher rejects the input.
    /// Repeated runs return the maximal trailing run.
    pub fn find<'a>(&self, input: &'a str) -> Option<&'a str> {
        match self {
            SuffixMatcher::RepeatedRun { class, min_len } => {
                let last = input.chars().next_back()?;
                if !class.contains(last) {
                    return None;
                }
                let run_len = input.chars().rev().take_while(|&c| c == last).count();
                if run_len < *min_len {
                    return None;
                }
                // class members are ASCII, one byte each
                Some(&input[input.len() - run_len..])
            }
            SuffixMatcher::Pattern(regex) => regex
                .find(input)
                .filter(|m| m.end() == input.len())
                .map(|m| m.as_str()),
        }
    }
}

/// Address predicate
pub type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// How a rule tests an address
#[derive(Clone)]
pub enum RuleKind {
    SuffixPattern(SuffixMatcher),
    Predicate(Predicate),
}

impl fmt::Debug for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::SuffixPattern(matcher) => f.debug_tuple("SuffixPattern").field(matcher).finish(),
            RuleKind::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// File naming used when a match of this rule is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingScheme {
    /// `{len}{matched}_{address}.json`
    LengthPrefixed,
    /// `{address}.json`
    AddressOnly,
}

/// Named rule; the name doubles as match type and storage category
#[derive(Debug, Clone)]
pub struct Rule {
    pub name: String,
    pub label: String,
    pub kind: RuleKind,
    pub naming: NamingScheme,
}

impl Rule {
    /// Run of identical characters at the end of the address
    pub fn repeated_run(name: &str, label: &str, class: CharClass) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: RuleKind::SuffixPattern(SuffixMatcher::RepeatedRun {
                class,
                min_len: MIN_RUN_LEN,
            }),
            naming: NamingScheme::LengthPrefixed,
        }
    }

    /// Regex suffix; `regex` should be anchored with `$`
    pub fn suffix_regex(name: &str, label: &str, regex: Regex) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: RuleKind::SuffixPattern(SuffixMatcher::Pattern(regex)),
            naming: NamingScheme::LengthPrefixed,
        }
    }

    /// Arbitrary predicate over the address
    pub fn predicate<F>(name: &str, label: &str, naming: NamingScheme, test: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: RuleKind::Predicate(Arc::new(test)),
            naming,
        }
    }

    /// Matched text for this rule: `Some("")` for an accepting predicate,
    /// `None` when the rule rejects the address.
    pub fn capture<'a>(&self, address: &'a str) -> Option<&'a str> {
        match &self.kind {
            RuleKind::SuffixPattern(matcher) => matcher.find(address),
            RuleKind::Predicate(test) => test(address).then_some(""),
        }
    }

    #[inline]
    pub fn is_match(&self, address: &str) -> bool {
        self.capture(address).is_some()
    }
}

/// Ordered, immutable rule table
#[derive(Debug, Clone)]
pub struct PatternRuleSet {
    rules: Vec<Rule>,
}

impl PatternRuleSet {
    /// Build a rule set from an ordered list; names must be unique
    pub fn new(rules: Vec<Rule>) -> AppResult<Self> {
        for (idx, rule) in rules.iter().enumerate() {
            if rules[..idx].iter().any(|earlier| earlier.name == rule.name) {
                return Err(AppError::new(
                    ErrorCode::ConfigInvalidValue,
                    format!("duplicate rule name: {}", rule.name),
                ));
            }
        }
        Ok(Self { rules })
    }

    /// The production rule table, in evaluation order
    pub fn standard() -> Self {
        Self {
            rules: vec![
                Rule::repeated_run(RULE_LOWERCASE_RUN, "lowercase letter run", CharClass::Lowercase),
                Rule::repeated_run(RULE_UPPERCASE_RUN, "uppercase letter run", CharClass::Uppercase),
                Rule::repeated_run(RULE_DIGIT_RUN, "repeated digit run", CharClass::Digit),
                Rule::predicate(
                    RULE_ASCENDING_DIGITS,
                    "ascending digits",
                    NamingScheme::AddressOnly,
                    is_ascending_suffix,
                ),
                Rule::suffix_regex(RULE_WHALEPAY, "word whalepay", WHALEPAY_SUFFIX.clone()),
                Rule::suffix_regex(RULE_PDDO, "word PDDO", PDDO_SUFFIX.clone()),
            ],
        }
    }

    /// Test `address` against every rule; the last accepting rule wins
    pub fn evaluate(&self, address: &str) -> Option<MatchResult> {
        let mut winner: Option<(&Rule, &str)> = None;

        for rule in &self.rules {
            if let Some(matched) = rule.capture(address) {
                winner = Some((rule, matched));
            }
        }

        winner.map(|(rule, matched)| MatchResult {
            rule_name: rule.name.clone(),
            matched_substring: matched.to_string(),
            address: address.to_string(),
        })
    }

    /// Rule by name
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    /// Rule names in evaluation order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for PatternRuleSet {
    fn default() -> Self {
        Self::standard()
    }
}
