//! Host event loop contract
//!
//! "Movement" is the firmware layer that owns the run loop: it delivers
//! events to the active face, switches between faces, and keeps the clock.
//! Every call here is synchronous and fire-and-forget from the face's
//! point of view.

use crate::event::Event;
use crate::time::DateTime;

/// Host control calls available to a face
pub trait Movement {
    /// Ask the host to deliver ticks at `hz` per second
    fn request_tick_frequency(&mut self, hz: u8);

    /// Switch to the next face in the host's face list
    fn move_to_next_face(&mut self);

    /// Switch to the face at `index` in the host's face list
    fn move_to_face(&mut self, index: u8);

    /// Default handling for events a face does not consume
    ///
    /// Returns whether the host consumed the event (e.g. mode button
    /// moving to the next face, light button turning on the LED).
    fn default_loop_handler(&mut self, event: Event) -> bool;

    /// Current local time in the given zone
    fn date_time_in_zone(&mut self, zone: u8) -> DateTime;
}
