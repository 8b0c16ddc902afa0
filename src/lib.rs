//! Wyrmseek - fuzzy quick-search for the Dragon Traveler wiki.
//!
//! Wyrmseek powers the site-wide search overlay: a single query box that
//! looks across every collection the wiki serves and turns keystrokes into
//! a capped, ranked, keyboard-navigable result list. Typo tolerance comes
//! from a bounded infix edit distance, so `firekn` still finds Fireknight
//! and `chars` still reaches the Characters page.
//!
//! # Architecture
//!
//! The library is organized into these main modules:
//!
//! - [`model`] - Collection records and the swappable catalog snapshot
//! - [`matcher`] - Field-weighted, typo-tolerant match scoring
//! - [`search`] - Per-source policies and the merged, capped result list
//! - [`pipeline`] - Debounced query state with stale-timer protection
//! - [`selection`] - Wraparound selection over the visible rows
//! - [`surface`] - The event-driven overlay controller and its timer driver
//! - [`keymap`] - Shortcut parsing and key-to-event mapping
//! - [`config`] - Host-tunable search knobs
//!
//! # Example
//!
//! ```ignore
//! use wyrmseek::{Catalog, SearchSurface, SearchTuning, SurfaceEffect, SurfaceEvent};
//!
//! let (mut surface, mut timer_events) = SearchSurface::new(catalog, SearchTuning::default());
//!
//! // Feed host input and surface timer events into the same update loop.
//! surface.update(SurfaceEvent::Show);
//! surface.update(SurfaceEvent::QueryChanged("firekn".into()));
//! while let Some(event) = timer_events.recv().await {
//!     if let Some(SurfaceEffect::Navigate(path)) = surface.update(event) {
//!         router.push(&path);
//!     }
//! }
//! ```

// Public modules
pub mod config;
pub mod keymap;
pub mod matcher;
pub mod model;
pub mod pipeline;
pub mod search;
pub mod selection;
pub mod surface;

// Internal modules
mod error;

// Re-export commonly used types for convenience
pub use config::SearchTuning;
pub use error::{WyrmseekError, WyrmseekResult};
pub use keymap::{Key, Keymap, Modifiers, Shortcut};
pub use model::Catalog;
pub use search::{search, ResultDescriptor, ResultKind};
pub use surface::{SearchSurface, SurfaceEffect, SurfaceEvent};
