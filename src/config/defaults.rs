// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Lightbox**: Overlay fade, image scale-in and swipe detection
//! - **Filter**: Staggered show/hide animation of gallery entries
//! - **Gallery**: Entrance animation and image preloading

// ==========================================================================
// Lightbox Defaults
// ==========================================================================

/// Duration of the overlay fade in/out (in milliseconds).
pub const DEFAULT_FADE_MS: u64 = 300;

/// Minimum overlay fade duration.
pub const MIN_FADE_MS: u64 = 0;

/// Maximum overlay fade duration.
pub const MAX_FADE_MS: u64 = 2_000;

/// Delay between activating the overlay and starting its fade-in.
pub const DEFAULT_ENTRANCE_DEFER_MS: u64 = 10;

/// Delay between an image finishing loading and its scale-in.
pub const DEFAULT_SCALE_IN_DELAY_MS: u64 = 50;

/// Duration of the image scale-in once it starts.
pub const DEFAULT_SCALE_IN_MS: u64 = 300;

/// Scale the image starts from when it pops in.
pub const IMAGE_START_SCALE: f32 = 0.9;

/// Opacity of the displayed image while the next one loads.
pub const IMAGE_LOADING_OPACITY: f32 = 0.5;

/// Minimum horizontal travel (logical pixels) for a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 100.0;

/// Minimum swipe threshold.
pub const MIN_SWIPE_THRESHOLD: f32 = 10.0;

/// Maximum swipe threshold.
pub const MAX_SWIPE_THRESHOLD: f32 = 1_000.0;

// ==========================================================================
// Filter Defaults
// ==========================================================================

/// Per-entry delay of the staggered filter animation.
pub const DEFAULT_STAGGER_MS: u64 = 50;

/// Maximum per-entry stagger.
pub const MAX_STAGGER_MS: u64 = 500;

/// Duration of a single entry's show/hide transition.
pub const DEFAULT_ITEM_TRANSITION_MS: u64 = 400;

/// Maximum single entry transition.
pub const MAX_ITEM_TRANSITION_MS: u64 = 2_000;

/// Minimum delay before the catalog is resynchronized after filtering.
pub const DEFAULT_RESYNC_MS: u64 = 500;

/// Scale of an entry once it is filtered out.
pub const HIDDEN_ENTRY_SCALE: f32 = 0.8;

/// Vertical offset (logical pixels) of an entry once it is filtered out.
pub const HIDDEN_ENTRY_OFFSET: f32 = 20.0;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Per-entry delay of the initial fade-in.
pub const DEFAULT_ENTRANCE_STAGGER_MS: u64 = 100;

/// Duration of each entry's initial fade-in.
pub const DEFAULT_ENTRANCE_FADE_MS: u64 = 600;

/// Number of decoded images kept by the preload cache.
pub const DEFAULT_PRELOAD_CACHE_IMAGES: usize = 32;

/// Minimum preload cache capacity.
pub const MIN_PRELOAD_CACHE_IMAGES: usize = 4;

/// Maximum preload cache capacity.
pub const MAX_PRELOAD_CACHE_IMAGES: usize = 256;

/// Number of thumbnails per grid row.
pub const GRID_COLUMNS: usize = 4;
