//! Username → entity resolution with the fixed account→chat fallback.

use std::sync::Arc;

use crate::{
    errors::Error,
    normalize::normalize_query,
    ports::{Directory, EntityRecord},
    Result,
};

/// Outcome of a lookup. The variant is selected by which fallback branch
/// succeeded: the bare-username branch yields an account, the `@`-prefixed
/// retry yields a chat.
#[derive(Clone, Debug)]
pub enum Resolved {
    Account(EntityRecord),
    Chat(EntityRecord),
}

pub struct Resolver {
    directory: Arc<dyn Directory>,
}

impl Resolver {
    pub fn new(directory: Arc<dyn Directory>) -> Self {
        Self { directory }
    }

    /// Normalize the raw query and resolve it.
    ///
    /// Fixed, non-configurable policy: try the bare username first; on any
    /// failure retry once with an `@` prefix; if both fail, the entity does
    /// not exist. Exactly one directory call per branch.
    pub async fn resolve(&self, raw: &str) -> Result<Resolved> {
        let username = normalize_query(raw).ok_or_else(|| {
            Error::Validation(
                "Please provide a Telegram URL or username in the 'url' parameter".to_string(),
            )
        })?;

        match self.directory.lookup(&username).await {
            Ok(record) => Ok(Resolved::Account(record)),
            Err(first) => {
                tracing::debug!(error = %first, %username, "user lookup failed, retrying as chat");
                match self.directory.lookup(&format!("@{username}")).await {
                    Ok(record) => Ok(Resolved::Chat(record)),
                    Err(_) => Err(Error::NotFound),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;

    /// Directory stub: fails the first `fail_first` lookups, then succeeds.
    struct StubDirectory {
        fail_first: usize,
        calls: AtomicUsize,
        queries: std::sync::Mutex<Vec<String>>,
    }

    impl StubDirectory {
        fn new(fail_first: usize) -> Self {
            Self {
                fail_first,
                calls: AtomicUsize::new(0),
                queries: std::sync::Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Directory for StubDirectory {
        async fn lookup(&self, query: &str) -> Result<EntityRecord> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            self.queries.lock().unwrap().push(query.to_string());
            if n < self.fail_first {
                return Err(Error::Upstream("chat not found".to_string()));
            }
            Ok(EntityRecord {
                id: 42,
                username: Some("durov".to_string()),
                ..Default::default()
            })
        }

        async fn file_url(&self, _file_id: &str) -> Result<String> {
            Err(Error::Upstream("no files in stub".to_string()))
        }
    }

    #[tokio::test]
    async fn first_branch_success_is_an_account() {
        let dir = Arc::new(StubDirectory::new(0));
        let resolver = Resolver::new(dir.clone());

        let resolved = resolver.resolve("https://t.me/durov").await.unwrap();
        assert!(matches!(resolved, Resolved::Account(_)));
        assert_eq!(dir.calls.load(Ordering::SeqCst), 1);
        assert_eq!(dir.queries.lock().unwrap().as_slice(), ["durov"]);
    }

    #[tokio::test]
    async fn fallback_retries_with_at_prefix_and_yields_a_chat() {
        let dir = Arc::new(StubDirectory::new(1));
        let resolver = Resolver::new(dir.clone());

        let resolved = resolver.resolve("durov").await.unwrap();
        assert!(matches!(resolved, Resolved::Chat(_)));
        assert_eq!(
            dir.queries.lock().unwrap().as_slice(),
            ["durov", "@durov"]
        );
    }

    #[tokio::test]
    async fn both_branches_failing_is_not_found() {
        let dir = Arc::new(StubDirectory::new(2));
        let resolver = Resolver::new(dir.clone());

        let err = resolver.resolve("durov").await.unwrap_err();
        assert!(matches!(err, Error::NotFound));
        assert_eq!(dir.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn empty_query_never_reaches_the_directory() {
        let dir = Arc::new(StubDirectory::new(0));
        let resolver = Resolver::new(dir.clone());

        let err = resolver.resolve("  ").await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(dir.calls.load(Ordering::SeqCst), 0);
    }
}
