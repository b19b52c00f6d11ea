// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Every component follows the Elm-style "state down, messages up" pattern:
//! a `ViewContext` borrowed from the application state, a `Message` enum and,
//! where the parent needs a translated intent, an `Event` returned by `update`.
//!
//! - [`gallery_grid`] - Thumbnail grid with filter and entrance animations
//! - [`filter_bar`] - Category filter buttons
//! - [`lightbox_overlay`] - Full-window image overlay with caption and controls
//! - [`language_bar`] - Language picker
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod filter_bar;
pub mod gallery_grid;
pub mod language_bar;
pub mod lightbox_overlay;
