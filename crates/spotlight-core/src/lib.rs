#![forbid(unsafe_code)]

//! Core: geometry primitives and screen metrics for the Spotlight overlay.
//!
//! # Role in Spotlight
//! `spotlight-core` holds the plain-data types the rest of the workspace
//! computes with: measured target rectangles, safe-area insets, and the
//! screen metrics value the host refreshes on rotation or resize. It has no
//! opinion about rendering or tour state.
//!
//! # How it fits in the system
//! The overlay crate (`spotlight-overlay`) stores [`Rect`] values produced by
//! its layout resolver and feeds them, together with a [`ScreenMetrics`],
//! into its placement engine. Nothing here is platform specific.

pub mod geometry;

pub use geometry::{EdgeInsets, Rect, ScreenMetrics};
