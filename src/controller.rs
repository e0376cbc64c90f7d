//! Selection controller: the state behind the keyboard's tab bar and grid.
//!
//! The controller owns the compatible catalog, its category buckets, the
//! active tab and the search state. The rendering layer asks it what to show
//! ([`SelectionController::current_view`], [`SelectionController::current_list`])
//! and forwards taps to it; emoji picks and deletes come back out as
//! [`KeyboardEvent`]s through the callback given at mount.
//!
//! Debounced search passes land through [`SelectionController::poll_search`]
//! (non-blocking) or [`SelectionController::settle`] (awaits the pending pass).

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;

use crate::catalog::EmojiRecord;
use crate::categorize::{categorize, Categories, CategoryBucket};
use crate::compat::CompatibleCatalog;
use crate::config::KeyboardConfig;
use crate::device::DeviceProfile;
use crate::error::{KeyboardError, KeyboardResult};
use crate::search::{DebouncedSearch, SearchOutcome};

/// Notification for the owner of the text being edited
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum KeyboardEvent {
    /// Insert the picked emoji
    Add { emoji: String },
    /// Delete one character
    Remove,
    /// Long-press delete
    RemoveLong,
}

/// Callback receiving keyboard events
pub type EventCallback = Arc<dyn Fn(KeyboardEvent) + Send + Sync + 'static>;

/// What the rendering layer should currently show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Hidden,
    CategoryGrid,
    SearchResults,
    Loading,
}

/// The list widget the controller drives
pub trait ListSurface: Send {
    /// Jump back to the first item without animating
    fn scroll_to_start(&mut self);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<EmojiRecord>,
    pub is_pending: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub active_category_index: usize,
    pub search: SearchState,
}

/// One entry of the tab bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTab<'a> {
    pub title: &'a str,
    pub symbol: &'a str,
    pub active: bool,
}

pub struct SelectionController {
    compatible: CompatibleCatalog,
    categories: Categories,
    state: SelectionState,
    search: DebouncedSearch,
    on_event: EventCallback,
    surface: Option<Box<dyn ListSurface>>,
    visible: bool,
}

impl SelectionController {
    /// Build the keyboard for a device.
    ///
    /// Filters and categorizes `catalog` once. Must be called from inside a
    /// Tokio runtime; search passes are spawned on it.
    pub fn mount(
        config: &KeyboardConfig,
        profile: &DeviceProfile,
        catalog: &[EmojiRecord],
        on_event: EventCallback,
    ) -> KeyboardResult<Self> {
        let runtime = Handle::try_current()
            .map_err(|e| KeyboardError::Runtime(format!("emoji search needs a runtime: {}", e)))?;

        let compatible = CompatibleCatalog::build(catalog, profile, &config.compat);
        let categories = categorize(compatible.records());
        let search = DebouncedSearch::new(compatible.shared(), config.search.debounce(), runtime);

        tracing::info!(
            platform = %profile.platform,
            emoji = compatible.len(),
            categories = categories.len(),
            "Emoji keyboard mounted"
        );

        Ok(Self {
            compatible,
            categories,
            state: SelectionState::default(),
            search,
            on_event,
            surface: None,
            visible: config.visible,
        })
    }

    /// Connect the list widget whose scroll position category changes reset
    pub fn attach_surface(&mut self, surface: Box<dyn ListSurface>) {
        self.surface = Some(surface);
    }

    pub fn compatible(&self) -> &CompatibleCatalog {
        &self.compatible
    }

    /// Representative record of each category, index-aligned with buckets
    pub fn categories(&self) -> &[EmojiRecord] {
        self.categories.representatives()
    }

    pub fn buckets(&self) -> &[CategoryBucket] {
        self.categories.buckets()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn search_state(&self) -> &SearchState {
        &self.state.search
    }

    pub fn active_category(&self) -> usize {
        self.state.active_category_index
    }

    /// Tab bar entries with the active one flagged
    pub fn tabs(&self) -> Vec<CategoryTab<'_>> {
        self.categories
            .buckets()
            .iter()
            .enumerate()
            .map(|(i, bucket)| CategoryTab {
                title: &bucket.title,
                symbol: &bucket.symbol,
                active: i == self.state.active_category_index,
            })
            .collect()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn current_view(&self) -> View {
        if !self.visible {
            View::Hidden
        } else if self.state.search.query.is_empty() {
            View::CategoryGrid
        } else if self.state.search.is_pending {
            View::Loading
        } else {
            View::SearchResults
        }
    }

    /// Records the grid should display right now
    pub fn current_list(&self) -> &[EmojiRecord] {
        if !self.visible {
            return &[];
        }
        if !self.state.search.query.is_empty() {
            return &self.state.search.results;
        }
        self.categories
            .get(self.state.active_category_index)
            .map(|bucket| bucket.members.as_slice())
            .unwrap_or(&[])
    }

    /// Switch tabs. Indices past the last category are rejected.
    pub fn set_active_category(&mut self, index: usize) -> KeyboardResult<()> {
        if !self.visible {
            return Ok(());
        }

        let len = self.categories.len();
        if index >= len {
            return Err(KeyboardError::CategoryOutOfRange { index, len });
        }

        if let Some(surface) = self.surface.as_mut() {
            surface.scroll_to_start();
        }
        self.state.active_category_index = index;
        Ok(())
    }

    /// Update the search text; empty text leaves search mode at once
    pub fn set_search_query(&mut self, text: &str) {
        if !self.visible {
            return;
        }

        if text.is_empty() {
            self.search.cancel();
            self.state.search = SearchState::default();
            return;
        }

        self.state.search = SearchState {
            query: text.to_string(),
            results: Vec::new(),
            is_pending: true,
        };
        self.search.schedule(text);
    }

    /// Same as setting an empty query
    pub fn clear_search(&mut self) {
        self.set_search_query("");
    }

    /// Commit a finished search pass if one is ready.
    ///
    /// Returns true when results changed.
    pub fn poll_search(&mut self) -> bool {
        match self.search.try_next() {
            Some(outcome) => {
                self.commit(outcome);
                true
            }
            None => false,
        }
    }

    /// Wait for the pending search pass, if any, and commit it
    pub async fn settle(&mut self) {
        if let Some(outcome) = self.search.next().await {
            self.commit(outcome);
        }
    }

    fn commit(&mut self, outcome: SearchOutcome) {
        tracing::debug!(
            query = %outcome.query,
            results = outcome.results.len(),
            "Committing search results"
        );
        self.state.search.results = outcome.results;
        self.state.search.is_pending = false;
    }

    pub fn select_emoji(&self, glyph: &str) {
        self.emit(KeyboardEvent::Add {
            emoji: glyph.to_string(),
        });
    }

    pub fn delete_last(&self) {
        self.emit(KeyboardEvent::Remove);
    }

    pub fn delete_all(&self) {
        self.emit(KeyboardEvent::RemoveLong);
    }

    fn emit(&self, event: KeyboardEvent) {
        if self.visible {
            (self.on_event)(event);
        }
    }

    /// Show or hide the keyboard.
    ///
    /// Hiding cancels any pending search; showing again re-runs it for the
    /// query that was left uncommitted.
    pub fn set_visible(&mut self, visible: bool) {
        if visible == self.visible {
            return;
        }
        self.visible = visible;

        if !visible {
            self.search.cancel();
        } else if self.state.search.is_pending {
            let query = self.state.search.query.clone();
            self.search.schedule(&query);
        }
    }

    /// Cancel pending work before the keyboard goes away
    pub fn dispose(&mut self) {
        self.search.cancel();
        self.state.search.is_pending = false;
    }
}
