//! Board-agnostic world clock face logic
//!
//! This crate contains the face itself and everything it needs that does
//! not depend on a particular watch:
//!
//! - Per-instance settings record and its persistence
//! - Display/settings state machine
//! - Label character cycling for classic and custom glass
//! - Tiered time rendering
//! - Static timezone table
//!
//! Hosts reach the face through [`face::WatchFace`], lending their display,
//! file store, event loop and zone resolver for each call.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod cycler;
pub mod face;
pub mod registry;
pub mod render;
pub mod settings;
pub mod state;
pub mod zones;

#[cfg(test)]
mod mock;

pub use config::FaceConfig;
pub use face::{FaceContext, WatchFace, WorldClockFace};
pub use registry::{ClockIndex, ClockIndexAllocator};
pub use settings::{PersistOutcome, SettingsError, WorldClockSettings};
pub use zones::StaticZoneTable;
