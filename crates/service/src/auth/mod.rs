//! Admin authorization.
//!
//! The route layer asks an [`AdminAuthorizer`] before any mutating call reaches
//! the contact store; the store itself never sees credentials.

use std::collections::HashSet;

use async_trait::async_trait;

/// Decides whether a presented credential may mutate admin-managed data.
#[async_trait]
pub trait AdminAuthorizer: Send + Sync {
    async fn authorize(&self, credential: &str) -> bool;
}

/// Fixed set of admin API keys. An empty set denies everything.
#[derive(Clone, Debug, Default)]
pub struct StaticKeyAuthorizer {
    keys: HashSet<String>,
}

impl StaticKeyAuthorizer {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys = keys
            .into_iter()
            .map(Into::into)
            .map(|k: String| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keys }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[async_trait]
impl AdminAuthorizer for StaticKeyAuthorizer {
    async fn authorize(&self, credential: &str) -> bool {
        let credential = credential.trim();
        !credential.is_empty() && self.keys.contains(credential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn accepts_only_configured_keys() {
        let auth = StaticKeyAuthorizer::new(["admin-key", "ops-key"]);
        assert_eq!(auth.len(), 2);
        assert!(auth.authorize("admin-key").await);
        assert!(auth.authorize(" ops-key ").await);
        assert!(!auth.authorize("guest").await);
        assert!(!auth.authorize("").await);
    }

    #[tokio::test]
    async fn configured_keys_are_trimmed() {
        let auth = StaticKeyAuthorizer::new([" padded-key ", "\tother\n"]);
        assert!(auth.authorize("padded-key").await);
        assert!(auth.authorize(" padded-key ").await);
        assert!(auth.authorize("other").await);
    }

    #[tokio::test]
    async fn empty_key_set_denies_all() {
        let auth = StaticKeyAuthorizer::new(Vec::<String>::new());
        assert!(auth.is_empty());
        assert!(!auth.authorize("anything").await);
    }

    #[tokio::test]
    async fn blank_configured_keys_are_ignored() {
        let auth = StaticKeyAuthorizer::new(["", "   "]);
        assert!(auth.is_empty());
        assert!(!auth.authorize("   ").await);
    }
}
