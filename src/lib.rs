//! Emoji keyboard - device-aware emoji picker core.
//!
//! Turns a static emoji catalog into what a picker widget shows: the subset
//! the device can render, grouped into category tabs, narrowed by a debounced
//! prefix search.
//!
//! # Architecture
//!
//! The library is organized into these main modules:
//!
//! - [`catalog`] - Emoji records and catalog loading
//! - [`device`] - Device profile and platform support tables
//! - [`compat`] - Compatibility filtering per device
//! - [`categorize`] - Category buckets for the tab bar
//! - [`search`] - Prefix matching and the debounced search runner
//! - [`controller`] - Selection state consumed by the rendering layer
//! - [`config`] - Configuration loading
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use emoji_keyboard::{Catalog, DeviceProfile, KeyboardConfig, SelectionController};
//!
//! let mut keyboard = SelectionController::mount(
//!     &KeyboardConfig::load(),
//!     &DeviceProfile::ios("16.4"),
//!     Catalog::builtin().records(),
//!     Arc::new(|event| println!("{:?}", event)),
//! )?;
//!
//! keyboard.set_search_query("heart");
//! keyboard.settle().await;
//! ```

pub mod catalog;
pub mod categorize;
pub mod compat;
pub mod config;
pub mod controller;
pub mod device;
pub mod search;
pub mod version;

mod error;

pub use catalog::{Catalog, EmojiRecord};
pub use categorize::{categorize, Categories, CategoryBucket};
pub use compat::{CompatibleCatalog, Threshold};
pub use config::KeyboardConfig;
pub use controller::{
    CategoryTab, EventCallback, KeyboardEvent, ListSurface, SearchState, SelectionController,
    SelectionState, View,
};
pub use device::{DeviceProfile, Platform};
pub use error::{KeyboardError, KeyboardResult};
