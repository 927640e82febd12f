//! Tron Vanity Library
//!
//! Brute-force search for TRON addresses with cosmetic endings:
//! - runs of five or more identical letters or digits
//! - five or more strictly ascending digits
//! - the fixed words `whalepay` and `PDDO`
//!
//! Hits are stored per rule category with their full key material and can
//! be pushed to an HTTP endpoint.

pub mod core;
pub mod models;
pub mod providers;
pub mod telemetry;
pub mod utils;

pub use crate::core::{
    is_ascending_suffix, spawn_progress_line, CharClass, MatchClassifier, NamingScheme,
    PatternRuleSet, Rule, RuleKind, SavedMatch, ShutdownSignal, SuffixMatcher, VanityHunter,
};
pub use models::{
    Account, AccountAddress, AppError, AppResult, Classification, ErrorCode, MatchResult,
    VanityConfig,
};
pub use providers::{account_from_secret, AccountProvider, MatchStore, PushNotifier, TronKeyGenerator};
pub use telemetry::{RunStatistics, RunSummary};
