use std::collections::VecDeque;
use tokio::sync::RwLock;

use crate::omdb::Movie;

/// How many title searches we remember.
pub const HISTORY_CAPACITY: usize = 5;

/// Bounded, insertion-ordered history of successful title searches.
///
/// This is a capped FIFO, not an LRU: repeat searches are appended again
/// rather than moved, and once full every insert evicts exactly the oldest
/// entry. Shared by every in-flight request, so all access goes through
/// the lock.
pub struct SearchHistory {
    entries: RwLock<VecDeque<Movie>>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(VecDeque::with_capacity(HISTORY_CAPACITY)),
        }
    }

    /// Append a movie, evicting from the front until the capacity bound
    /// holds again. Never fails; no deduplication.
    pub async fn record(&self, movie: Movie) {
        let mut entries = self.entries.write().await;
        entries.push_back(movie);
        while entries.len() > HISTORY_CAPACITY {
            entries.pop_front();
        }
    }

    /// Copy of the current history, oldest first.
    pub async fn snapshot(&self) -> Vec<Movie> {
        let entries = self.entries.read().await;
        entries.iter().cloned().collect()
    }
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str) -> Movie {
        crate::omdb::decode_movie(&format!(r#"{{"Title": "{}"}}"#, title)).unwrap()
    }

    #[tokio::test]
    async fn test_snapshot_empty_on_fresh_store() {
        let history = SearchHistory::new();
        assert!(history.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn test_length_is_min_of_records_and_capacity() {
        let history = SearchHistory::new();
        for n in 1..=8 {
            history.record(movie(&format!("Movie {}", n))).await;
            let len = history.snapshot().await.len();
            assert_eq!(len, n.min(HISTORY_CAPACITY));
        }
    }

    #[tokio::test]
    async fn test_evicts_oldest_first() {
        let history = SearchHistory::new();
        for n in 1..=6 {
            history.record(movie(&format!("Movie {}", n))).await;
        }

        let titles: Vec<String> = history
            .snapshot()
            .await
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(
            titles,
            vec!["Movie 2", "Movie 3", "Movie 4", "Movie 5", "Movie 6"]
        );
    }

    #[tokio::test]
    async fn test_duplicates_are_kept_and_evicted_one_at_a_time() {
        let history = SearchHistory::new();
        for _ in 0..5 {
            history.record(movie("Groundhog Day")).await;
        }
        history.record(movie("Something Else")).await;

        let snapshot = history.snapshot().await;
        assert_eq!(snapshot.len(), HISTORY_CAPACITY);
        assert_eq!(snapshot[0].title, "Groundhog Day");
        assert_eq!(snapshot[4].title, "Something Else");
    }

    #[tokio::test]
    async fn test_snapshot_is_a_copy() {
        let history = SearchHistory::new();
        history.record(movie("Stalker")).await;

        let mut snapshot = history.snapshot().await;
        snapshot.clear();

        assert_eq!(history.snapshot().await.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_records_keep_the_bound() {
        let history = std::sync::Arc::new(SearchHistory::new());
        let mut handles = Vec::new();
        for n in 0..20 {
            let history = history.clone();
            handles.push(tokio::spawn(async move {
                history.record(movie(&format!("Movie {}", n))).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(history.snapshot().await.len(), HISTORY_CAPACITY);
    }
}
