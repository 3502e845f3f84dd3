// SPDX-License-Identifier: MPL-2.0
//! `marquee` is a themeable, animated collection-carousel frontend built with
//! the Iced GUI framework.
//!
//! The carousel engine (windowing, animation, theming) is toolkit-agnostic
//! and lives in [`carousel`], [`drawable`], and [`render`]; the Iced shell in
//! [`app`] and [`ui`] hosts it on a canvas.

pub mod app;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod drawable;
pub mod error;
pub mod geometry;
pub mod render;
pub mod script;
pub mod theme;
pub mod ui;
