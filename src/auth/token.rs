//! Constant-time token comparison

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Verifies caller-supplied tokens against the configured shared secret.
///
/// Only the SHA-256 digest of the expected secret is held; presented
/// tokens are hashed the same way and the digests compared in constant
/// time. Hashing first also keeps the comparison fixed-width regardless of
/// token length.
#[derive(Clone)]
pub struct TokenAuthenticator {
    expected_digest: [u8; 32],
}

impl TokenAuthenticator {
    /// Create an authenticator for the given shared secret
    pub fn new(secret: &str) -> Self {
        Self {
            expected_digest: sha256(secret),
        }
    }

    /// Check a presented token. Returns only pass/fail.
    pub fn verify(&self, presented: &str) -> bool {
        sha256(presented).ct_eq(&self.expected_digest).into()
    }
}

impl std::fmt::Debug for TokenAuthenticator {
    // Never expose the digest in logs.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenAuthenticator").finish_non_exhaustive()
    }
}

fn sha256(input: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hasher.finalize().into()
}
