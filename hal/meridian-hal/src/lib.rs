//! Meridian Host Abstraction Layer
//!
//! This crate defines the contracts between a watch face and the firmware
//! that hosts it. The face only ever calls into these traits; the host
//! (or a test fake) provides the implementations.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Faces (meridian-core, etc.)            │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  meridian-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┼───────────┐
//!         ▼           ▼           ▼
//! ┌────────────┐ ┌──────────┐ ┌──────────┐
//! │ file store │ │ movement │ │  zones   │
//! └────────────┘ └──────────┘ └──────────┘
//! ```
//!
//! # Traits
//!
//! - [`storage::FileStore`] - Exact-filename blob storage
//! - [`movement::Movement`] - Event loop host: ticks, face switching, clock
//! - [`zones::ZoneResolver`] - Timezone names and UTC offsets
//!
//! # Types
//!
//! - [`event::Event`] - One event delivered by the host
//! - [`time::DateTime`] - Bit-packed calendar date and time

#![no_std]
#![deny(unsafe_code)]

pub mod event;
pub mod movement;
pub mod storage;
pub mod time;
pub mod zones;

// Re-export key types at crate root for convenience
pub use event::{Event, EventKind};
pub use movement::Movement;
pub use storage::{FileName, FileStore, StorageError, MAX_FILENAME_LEN};
pub use time::DateTime;
pub use zones::ZoneResolver;
