//! Ascending digit detector
//!
//! Looks at the maximal run of ASCII digits at the end of a string and
//! accepts it only when the whole run counts up by exactly one per step
//! (`12345`, `56789`, `0123456`). `9` never wraps to `0`.

use crate::utils::constants::MIN_RUN_LEN;

/// Maximal trailing run of ASCII digits (may be empty)
pub fn trailing_digits(s: &str) -> &str {
    let start = s
        .bytes()
        .rposition(|b| !b.is_ascii_digit())
        .map(|idx| idx + 1)
        .unwrap_or(0);
    &s[start..]
}

/// True when `address` ends in at least five digits that ascend by one,
/// judged over the entire trailing run.
///
/// `x123458` is rejected even though it contains `12345`: the captured run is
/// `123458` and the last step `5 -> 8` breaks the chain.
pub fn is_ascending_suffix(address: &str) -> bool {
    let run = trailing_digits(address);
    if run.len() < MIN_RUN_LEN {
        return false;
    }

    run.as_bytes().windows(2).all(|pair| pair[1] == pair[0] + 1)
}
