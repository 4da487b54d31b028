//! Segment display abstraction for Meridian faces
//!
//! This crate provides:
//! - `SegmentDisplay` trait for the watch's segment LCD
//! - `LcdType`, `Position` and `Indicator` display vocabulary
//! - `LcdScreen`, an in-memory LCD that records what was drawn
//!
//! # Architecture
//!
//! Faces draw through `SegmentDisplay` without caring which glass is
//! fitted; the only capability question they ask is `lcd_type()`.
//!
//! ## Supported Glass
//!
//! - **Classic LCD**: ten positions; only position 0 renders the full
//!   glyph set, the others have a reduced segment layout.
//! - **Custom LCD**: eleven positions, all with the full glyph set.
//!
//! On the host, `LcdScreen` stands in for either glass.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod screen;

// Re-export key types
pub use backend::{Indicator, LcdType, Position, SegmentDisplay};
pub use screen::{DisplayWrite, LcdScreen, LCD_POSITIONS};
