//! Events delivered by the host to the active face

/// Kind of event delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventKind {
    /// No event (placeholder delivered by some hosts)
    None,
    /// Face became active and should draw itself
    Activate,
    /// Regular tick at the requested tick frequency
    Tick,
    /// Once-a-minute tick while the device is in low energy mode
    LowEnergyUpdate,

    // Light button
    /// Light button pressed
    LightButtonDown,
    /// Light button released
    LightButtonUp,
    /// Light button held (>=500 ms)
    LightLongPress,

    // Mode button
    /// Mode button pressed
    ModeButtonDown,
    /// Mode button released
    ModeButtonUp,
    /// Mode button held (>=500 ms)
    ModeLongPress,

    // Alarm button
    /// Alarm button pressed
    AlarmButtonDown,
    /// Alarm button released
    AlarmButtonUp,
    /// Alarm button held (>=500 ms)
    AlarmLongPress,

    /// No user input for the host's idle timeout
    Timeout,
}

/// An event with the sub-second counter at delivery time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Event {
    /// What happened
    pub kind: EventKind,
    /// Tick count within the current second (0 at the top of the second)
    pub subsecond: u8,
}

impl Event {
    /// Create an event at subsecond 0
    pub const fn new(kind: EventKind) -> Self {
        Self { kind, subsecond: 0 }
    }

    /// Create an event at a given subsecond
    pub const fn at(kind: EventKind, subsecond: u8) -> Self {
        Self { kind, subsecond }
    }

    /// Same event with a different kind
    ///
    /// Used when a handler re-dispatches an event under another kind,
    /// e.g. rendering an activation frame on leaving settings.
    pub const fn with_kind(self, kind: EventKind) -> Self {
        Self {
            kind,
            subsecond: self.subsecond,
        }
    }

    /// Check if the event arrived in an odd sub-second slot
    ///
    /// Settings screens use this as their blink phase.
    pub fn is_blink_phase(&self) -> bool {
        self.subsecond % 2 == 1
    }

    /// Check if this is a low energy refresh
    pub fn is_low_energy(&self) -> bool {
        self.kind == EventKind::LowEnergyUpdate
    }
}
