// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is an image gallery built with the Iced GUI framework.
//!
//! It shows a filterable thumbnail grid and a lightbox with keyboard and swipe
//! navigation, localized captions and animated transitions. The widget logic
//! lives in [`gallery`] and has no dependency on the GUI loop; [`app`] and
//! [`ui`] wire it into an Iced window.

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod logging;
pub mod media;
pub mod ui;
