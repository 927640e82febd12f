//! Constants Module - Single Source of Truth
//!
//! Rule names, environment keys, defaults and chain parameters live here.
//! Other modules import them instead of repeating literals.

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name
pub const APP_NAME: &str = "TronVanity";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent for push notification requests
pub const USER_AGENT: &str = concat!("TronVanity/", env!("CARGO_PKG_VERSION"));

// ============================================
// TRON CHAIN CONSTANTS
// ============================================

/// Version byte prepended to the 20-byte account hash on TRON mainnet
pub const TRON_ADDRESS_PREFIX: u8 = 0x41;

/// Length of a decoded TRON address payload (prefix + hash)
pub const TRON_ADDRESS_LEN: usize = 21;

// ============================================
// RULE NAMES - also the storage category directories
// ============================================

/// Five or more identical lowercase letters at the end
pub const RULE_LOWERCASE_RUN: &str = "Lowercase-run";
/// Five or more identical uppercase letters at the end
pub const RULE_UPPERCASE_RUN: &str = "Uppercase-run";
/// Five or more identical digits at the end
pub const RULE_DIGIT_RUN: &str = "Digit-run";
/// Strictly consecutive ascending digits at the end
pub const RULE_ASCENDING_DIGITS: &str = "Ascending-digits";
/// Fixed word "whalepay", any case
pub const RULE_WHALEPAY: &str = "whalepay";
/// Fixed word "PDDO", exact case
pub const RULE_PDDO: &str = "pddo";

/// Minimum run length for every run-based rule
pub const MIN_RUN_LEN: usize = 5;

// ============================================
// STORAGE
// ============================================

/// Extension of persisted account files
pub const MATCH_FILE_EXTENSION: &str = "json";

/// Optional env file read from the working directory
pub const DOTENV_FILE: &str = ".env";

/// Default storage root (relative to the working directory)
pub const DEFAULT_OUTPUT_DIR: &str = "address";

// ============================================
// ENVIRONMENT KEYS
// ============================================

pub const ENV_PUSH_URL: &str = "PUSH_URL";
pub const ENV_OUTPUT_DIR: &str = "VANITY_OUTPUT_DIR";
pub const ENV_WORKERS: &str = "VANITY_WORKERS";
pub const ENV_PUSH_MAX_IN_FLIGHT: &str = "PUSH_MAX_IN_FLIGHT";
pub const ENV_PUSH_TIMEOUT_SECS: &str = "PUSH_TIMEOUT_SECS";
pub const ENV_PROGRESS_INTERVAL_MS: &str = "PROGRESS_INTERVAL_MS";

// ============================================
// DEFAULTS
// ============================================

/// Generation loops running side by side
pub const DEFAULT_WORKERS: usize = 1;

/// Concurrent push deliveries before new ones are dropped
pub const DEFAULT_PUSH_MAX_IN_FLIGHT: usize = 16;

/// Push request timeout (seconds)
pub const DEFAULT_PUSH_TIMEOUT_SECS: u64 = 10;

/// Status line refresh period (milliseconds)
pub const DEFAULT_PROGRESS_INTERVAL_MS: u64 = 250;
