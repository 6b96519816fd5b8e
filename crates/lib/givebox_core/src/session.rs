//! Admin session registry.
//!
//! Process-wide set of currently valid admin tokens, kept only in memory:
//! a restart invalidates every session and token holders are not notified.
//! Any number of tokens may be valid at once, and a token stays valid
//! until it is explicitly revoked.

use dashmap::DashSet;
use rand::distr::Alphanumeric;
use rand::{Rng, rng};

/// Session token length (alphanumeric chars).
const TOKEN_LEN: usize = 64;

/// Generate a random session token.
fn generate_token() -> String {
    rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LEN)
        .map(char::from)
        .collect()
}

/// In-memory registry of valid admin session tokens.
///
/// Backed by a concurrent set, so issue/check/revoke are atomic with
/// respect to concurrent requests.
pub struct SessionRegistry {
    tokens: DashSet<String>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            tokens: DashSet::new(),
        }
    }

    /// Issue a new token and register it as valid.
    pub fn issue(&self) -> String {
        let token = generate_token();
        self.tokens.insert(token.clone());
        token
    }

    /// Whether the token is currently registered.
    pub fn is_valid(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Remove a token. Revoking an absent token is not an error.
    pub fn revoke(&self, token: &str) {
        self.tokens.remove(token);
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
