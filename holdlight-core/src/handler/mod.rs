//! Frame handlers
//!
//! Complete frames from the framer land here. Config frames toggle
//! session flags or clear the wall; problem frames repaint it.

pub mod config;
pub mod problem;

pub use config::Directive;
pub use problem::ProblemSummary;

use holdlight_hal::{color, LedSurface};

/// Per-connection state mutated by the handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Session {
    /// Light the LED above each hold of the next problem
    pub led_above_hold: bool,
}

impl Session {
    /// Create a session with every flag cleared
    pub const fn new() -> Self {
        Self {
            led_above_hold: false,
        }
    }
}

/// Turn every LED off and flush
///
/// A failed flush is logged; the next flush retries the whole frame.
pub fn clear_all<L: LedSurface>(surface: &mut L) {
    surface.clear(color::OFF);
    if surface.show().is_err() {
        warn!("LED flush failed while clearing");
    }
}
