//! Fetch-or-default resolution shared by the resolvers

use std::collections::HashMap;
use std::future::Future;

use collab_core::DirectoryResult;
use tracing::{debug, error};

/// Resolve one value per requested id, defaulting whatever the fetch missed
///
/// `fetch` yields `(id, value)` pairs. If it fails, the error is logged and
/// every id receives `default(id)`; if it succeeds, only the ids absent from
/// its output do. The result always has one entry per element of `ids`, in
/// the same order. When the fetch returns an id more than once, the first
/// occurrence wins.
pub async fn resolve_with_fallback<T, Fut, D>(ids: &[String], fetch: Fut, default: D) -> Vec<T>
where
    T: Clone,
    Fut: Future<Output = DirectoryResult<Vec<(String, T)>>>,
    D: Fn(&str) -> T,
{
    let mut found: HashMap<String, T> = HashMap::new();
    match fetch.await {
        Ok(records) => {
            for (id, value) in records {
                found.entry(id).or_insert(value);
            }
        }
        Err(e) => {
            error!(error = %e, requested = ids.len(), "Error fetching users, using defaults");
        }
    }

    let resolved: Vec<T> = ids
        .iter()
        .map(|id| match found.get(id) {
            Some(value) => value.clone(),
            None => default(id),
        })
        .collect();

    let missing = ids.iter().filter(|id| !found.contains_key(id.as_str())).count();
    if missing > 0 {
        debug!(missing, requested = ids.len(), "Filled unresolved ids with defaults");
    }

    resolved
}
