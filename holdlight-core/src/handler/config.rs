//! Config frame handler
//!
//! A config frame such as `"~D*"` carries one-letter directives. Matching
//! is by substring anywhere in the frame; everything else is ignored.

use holdlight_hal::LedSurface;

use super::{clear_all, Session};

/// Recognized config directives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Directive {
    /// `D` - light the LED above each hold of the next problem
    LedAboveHold,
    /// `Z` - turn every LED off now
    Reset,
}

impl Directive {
    /// All directives in the order they are applied
    pub const ALL: [Directive; 2] = [Directive::LedAboveHold, Directive::Reset];

    /// Marker character inside the config frame
    pub const fn marker(self) -> char {
        match self {
            Directive::LedAboveHold => 'D',
            Directive::Reset => 'Z',
        }
    }

    /// Directives present in a config frame
    pub fn scan(frame: &str) -> impl Iterator<Item = Directive> + '_ {
        Self::ALL
            .into_iter()
            .filter(move |directive| frame.contains(directive.marker()))
    }
}

/// Apply a complete config frame
///
/// Returns the number of directives applied.
pub fn handle<L: LedSurface>(session: &mut Session, surface: &mut L, frame: &str) -> usize {
    let mut applied = 0;
    for directive in Directive::scan(frame) {
        match directive {
            Directive::LedAboveHold => {
                debug!("LED above hold enabled for next problem");
                session.led_above_hold = true;
            }
            Directive::Reset => {
                info!("Reset requested, clearing all LEDs");
                clear_all(surface);
            }
        }
        applied += 1;
    }

    if applied == 0 {
        debug!("Config frame {} has no known directive", frame);
    }
    applied
}
