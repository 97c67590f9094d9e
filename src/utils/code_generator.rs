//! Short code derivation.
//!
//! Codes are derived by hashing a caller-supplied seed, so the function is
//! pure: identical seeds yield identical codes. Freshness (timestamps, random
//! nonces) belongs in the seed, which keeps collision handling entirely in
//! the allocator.

use base64::Engine as _;
use sha2::{Digest, Sha256};

/// Generated code length in characters.
const CODE_LENGTH: usize = 6;

/// Derives a 6-character short code from a seed.
///
/// The seed is SHA-256 hashed and encoded as URL-safe base64 without padding,
/// truncated to [`CODE_LENGTH`] characters, so the output alphabet is
/// `[A-Za-z0-9_-]`. Collision-resistant but not collision-free: uniqueness is
/// enforced by the allocator against the store, not here.
///
/// # Examples
///
/// ```
/// use linkcut::utils::code_generator::generate_code;
///
/// let code = generate_code("https://example.com1754480000000000");
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_code(seed: &str) -> String {
    let digest = Sha256::digest(seed.as_bytes());
    let encoded = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(digest);

    encoded[..CODE_LENGTH].to_string()
}
