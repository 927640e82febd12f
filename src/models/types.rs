//! Type definitions for the vanity hunter
//! Account material, match results and storage classification

use serde::{Deserialize, Serialize};

/// Display forms of a TRON address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountAddress {
    /// Base58Check form, e.g. `TXyZ9KjRmN2bSvKLqP3wQxYzMnHc4Vu8tD`
    pub base58: String,
    /// Hex form with the `41` version byte, uppercase
    pub hex: String,
}

/// Freshly generated keypair and its address.
///
/// Serialized as-is into match files and push payloads, so the field names
/// follow the camelCase layout wallets import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// 32-byte secret scalar, uppercase hex
    pub private_key: String,
    /// Uncompressed SEC1 public key (`04` || X || Y), uppercase hex
    pub public_key: String,
    pub address: AccountAddress,
}

impl Account {
    /// Base58 address, the string every rule is evaluated against
    #[inline]
    pub fn base58(&self) -> &str {
        &self.address.base58
    }
}

/// Outcome of evaluating one address against the rule set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Name of the winning rule
    pub rule_name: String,
    /// Suffix the rule matched; empty for predicate rules
    pub matched_substring: String,
    /// Address that was evaluated
    pub address: String,
}

/// Where and under which name a match is stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Storage subdirectory, equal to the rule name
    pub category: String,
    /// File name including extension
    pub filename: String,
    /// Human-readable label for console output
    pub display_name: String,
}
