//! Face mode state machine
//!
//! Display vs. settings, and which settings page edits which field.

pub mod machine;

pub use machine::{last_page, EditField, FaceMode};
