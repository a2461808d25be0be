//! Signature grammar over free text.
//!
//! A signature line reads `SIGNED: <node_id> | <timestamp> | <role> |
//! <confidence>`. Only the prefix and the token before the first pipe are
//! load-bearing; everything after is informational and unchecked. Where the
//! text came from (PR description, commit message) is the caller's concern.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

static SIGNATURE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"SIGNED:\s*(\S+)\s*\|").expect("signature pattern is valid"));

/// Distinct claimed signer identities in `text`, sorted. Repetition by the
/// same signer counts once.
pub fn extract_signers(text: &str) -> BTreeSet<String> {
    SIGNATURE_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
