//! Comparison of a computed digest against a user-supplied reference.

use crate::error::{Error, Result};
use crate::sha256::DIGEST_SIZE;

/// Length of a SHA-256 digest rendered as hex characters.
pub const HEX_DIGEST_LEN: usize = 2 * DIGEST_SIZE;

/// Outcome of a digest comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Match,
    Mismatch,
}

/// Reject reference strings that cannot be a SHA-256 hex digest.
pub fn validate_reference(reference: &str) -> Result<()> {
    if reference.len() != HEX_DIGEST_LEN {
        return Err(Error::InvalidReferenceFormat {
            len: reference.len(),
        });
    }
    Ok(())
}

/// Compare a computed digest to a reference digest.
///
/// The computed side is always lowercase hex; the reference is lowercased
/// before the exact comparison, so case differences alone never mismatch.
pub fn compare(computed: &str, reference: &str) -> Result<Verdict> {
    validate_reference(reference)?;
    if computed == reference.to_ascii_lowercase() {
        Ok(Verdict::Match)
    } else {
        Ok(Verdict::Mismatch)
    }
}
