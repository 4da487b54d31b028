//! Watch face lifecycle
//!
//! The host owns a list of faces and drives the active one through
//! `activate`, a stream of `handle_event` calls, and `resign` when it
//! switches away. Construction (the host's "setup") is face-specific.
//!
//! Each call borrows the host's collaborators through a [`FaceContext`]
//! for its duration only; a face keeps no references between events.

pub mod world_clock;


use meridian_display::SegmentDisplay;
use meridian_hal::{Event, FileStore, Movement, ZoneResolver};

pub use world_clock::WorldClockFace;

/// Host collaborators lent to a face for one call
pub struct FaceContext<'a, D, F, M, Z> {
    pub display: &'a mut D,
    pub files: &'a mut F,
    pub movement: &'a mut M,
    pub zones: &'a Z,
}

impl<'a, D, F, M, Z> FaceContext<'a, D, F, M, Z>
where
    D: SegmentDisplay,
    F: FileStore,
    M: Movement,
    Z: ZoneResolver,
{
    pub fn new(display: &'a mut D, files: &'a mut F, movement: &'a mut M, zones: &'a Z) -> Self {
        Self {
            display,
            files,
            movement,
            zones,
        }
    }
}

/// Face lifecycle contract
pub trait WatchFace {
    /// Face is about to receive events
    fn activate<D, F, M, Z>(&mut self, ctx: &mut FaceContext<'_, D, F, M, Z>)
    where
        D: SegmentDisplay,
        F: FileStore,
        M: Movement,
        Z: ZoneResolver;

    /// Handle one event
    ///
    /// Returns whether the event was consumed; `false` lets the host
    /// apply its own handling.
    fn handle_event<D, F, M, Z>(&mut self, event: Event, ctx: &mut FaceContext<'_, D, F, M, Z>) -> bool
    where
        D: SegmentDisplay,
        F: FileStore,
        M: Movement,
        Z: ZoneResolver;

    /// Host is switching to another face
    fn resign<D, F, M, Z>(&mut self, ctx: &mut FaceContext<'_, D, F, M, Z>)
    where
        D: SegmentDisplay,
        F: FileStore,
        M: Movement,
        Z: ZoneResolver;
}
