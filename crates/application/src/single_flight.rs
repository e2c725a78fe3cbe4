use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use memberlens_core::{AppError, AppResult};
use tokio::sync::Mutex;

/// Outcome of a memoized lookup, either still in flight or already settled.
pub(crate) type SharedLookup<V> = Shared<BoxFuture<'static, AppResult<V>>>;

/// Per-key memoization of asynchronous lookups.
///
/// The first request for a key starts the computation and stores it before it
/// settles; every later request for that key, concurrent or not, awaits the
/// same outcome. Failures are memoized like successes. Entries never expire.
pub(crate) struct SingleFlightCache<K, V> {
    entries: Mutex<HashMap<K, SharedLookup<V>>>,
}

impl<K, V> SingleFlightCache<K, V>
where
    K: Eq + Hash,
    V: Clone + Send + Sync + 'static,
{
    /// Creates an empty cache.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the lookup stored for `key`, starting `compute` if there is none.
    ///
    /// The computation runs as its own task, so it keeps going when every
    /// caller stops waiting on it.
    pub(crate) async fn lookup<F, Fut>(&self, key: K, compute: F) -> SharedLookup<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = AppResult<V>> + Send + 'static,
    {
        let mut entries = self.entries.lock().await;
        if let Some(existing) = entries.get(&key) {
            return existing.clone();
        }

        let task = tokio::spawn(compute());
        let lookup = async move {
            match task.await {
                Ok(outcome) => outcome,
                Err(error) => Err(AppError::Internal(format!(
                    "directory lookup task failed: {error}"
                ))),
            }
        }
        .boxed()
        .shared();

        entries.insert(key, lookup.clone());
        lookup
    }

    /// Awaits the memoized outcome for `key`.
    pub(crate) async fn get<F, Fut>(&self, key: K, compute: F) -> AppResult<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = AppResult<V>> + Send + 'static,
    {
        self.lookup(key, compute).await.await
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }
}

impl<K, V> Default for SingleFlightCache<K, V>
where
    K: Eq + Hash,
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
