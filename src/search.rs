//! Emoji search: case-insensitive prefix matching plus a debounced runner.
//!
//! A query matches a record when it is a prefix of the description, of any
//! tag or of any alias. User text is escaped before it reaches the regex
//! engine, so `"(wink)"` matches literally.
//!
//! [`DebouncedSearch`] owns at most one pending timer. Every scheduled pass
//! carries a generation number; outcomes from older generations are dropped
//! when they arrive, so a superseded query can never overwrite newer results.

use std::sync::Arc;
use std::time::Duration;

use regex::{Regex, RegexBuilder};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::catalog::EmojiRecord;
use crate::error::KeyboardResult;

/// Quiet period before a search runs
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Compiled prefix pattern for one query
#[derive(Debug, Clone)]
pub struct SearchPattern {
    regex: Regex,
}

impl SearchPattern {
    pub fn new(query: &str) -> KeyboardResult<Self> {
        let regex = RegexBuilder::new(&format!("^{}", regex::escape(query)))
            .case_insensitive(true)
            .build()?;
        Ok(Self { regex })
    }

    /// Prefix match against a single field
    pub fn is_match(&self, field: &str) -> bool {
        self.regex.is_match(field)
    }

    /// Prefix match against description, tags or aliases
    pub fn matches(&self, record: &EmojiRecord) -> bool {
        self.is_match(&record.description)
            || record.tags.iter().any(|tag| self.is_match(tag))
            || record.aliases.iter().any(|alias| self.is_match(alias))
    }
}

/// Records in `catalog` matching `query`, in catalog order
pub fn search(catalog: &[EmojiRecord], query: &str) -> Vec<EmojiRecord> {
    let pattern = match SearchPattern::new(query) {
        Ok(pattern) => pattern,
        Err(e) => {
            tracing::warn!("Cannot search for {:?}: {}", query, e);
            return Vec::new();
        }
    };

    catalog
        .iter()
        .filter(|record| pattern.matches(record))
        .cloned()
        .collect()
}

/// Result of one completed search pass
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub generation: u64,
    pub query: String,
    pub results: Vec<EmojiRecord>,
}

/// Debounced search runner with a single pending timer.
///
/// Passes run as tasks on the runtime given at construction. Dropping the
/// runner aborts the pending pass.
pub struct DebouncedSearch {
    catalog: Arc<[EmojiRecord]>,
    delay: Duration,
    runtime: Handle,
    generation: u64,
    pending: Option<JoinHandle<()>>,
    tx: mpsc::UnboundedSender<SearchOutcome>,
    rx: mpsc::UnboundedReceiver<SearchOutcome>,
}

impl DebouncedSearch {
    pub fn new(catalog: Arc<[EmojiRecord]>, delay: Duration, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            catalog,
            delay,
            runtime,
            generation: 0,
            pending: None,
            tx,
            rx,
        }
    }

    /// Schedule a pass for `query`, replacing any pending one.
    ///
    /// Returns the generation the pass will report.
    pub fn schedule(&mut self, query: &str) -> u64 {
        self.cancel();

        let generation = self.generation;
        let catalog = Arc::clone(&self.catalog);
        let delay = self.delay;
        let tx = self.tx.clone();
        let query = query.to_string();

        tracing::debug!(generation, query = %query, "Scheduling emoji search");

        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let results = search(&catalog, &query);
            // Receiver lives as long as the runner; a failed send means it is gone
            let _ = tx.send(SearchOutcome {
                generation,
                query,
                results,
            });
        }));

        generation
    }

    /// Abort the pending pass, if any, and invalidate anything in flight
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        self.generation += 1;
    }

    /// Whether a scheduled pass has not been committed yet
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether `generation` is the most recently scheduled pass
    pub fn is_current(&self, generation: u64) -> bool {
        self.pending.is_some() && generation == self.generation
    }

    /// Take a finished, current outcome without waiting
    pub fn try_next(&mut self) -> Option<SearchOutcome> {
        while let Ok(outcome) = self.rx.try_recv() {
            if let Some(outcome) = self.accept(outcome) {
                return Some(outcome);
            }
        }
        None
    }

    /// Wait for the pending pass to finish.
    ///
    /// Returns `None` right away when nothing is pending.
    pub async fn next(&mut self) -> Option<SearchOutcome> {
        while self.pending.is_some() {
            let outcome = self.rx.recv().await?;
            if let Some(outcome) = self.accept(outcome) {
                return Some(outcome);
            }
        }
        None
    }

    fn accept(&mut self, outcome: SearchOutcome) -> Option<SearchOutcome> {
        if !self.is_current(outcome.generation) {
            tracing::debug!(
                generation = outcome.generation,
                current = self.generation,
                "Discarding stale search results"
            );
            return None;
        }
        self.pending = None;
        Some(outcome)
    }
}

impl Drop for DebouncedSearch {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
