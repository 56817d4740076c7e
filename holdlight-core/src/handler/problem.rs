//! Problem frame handler
//!
//! Clears the wall, renders every hold of the frame into the buffer,
//! flushes once, then drops the above-hold flag. Bad tokens and holds
//! off the board are skipped; the rest of the problem is still shown.

use holdlight_hal::LedSurface;

use super::{clear_all, Session};
use crate::hold::HoldToken;
use crate::render::HoldRenderer;

/// Outcome of one problem frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProblemSummary {
    /// Holds written to the frame buffer
    pub lit: u16,
    /// Tokens dropped (malformed or off the board)
    pub skipped: u16,
}

/// Render a complete problem frame (delimiters already stripped)
pub fn handle<L: LedSurface>(
    session: &mut Session,
    renderer: &HoldRenderer,
    surface: &mut L,
    frame: &str,
) -> ProblemSummary {
    let mut summary = ProblemSummary::default();

    clear_all(surface);

    for item in frame.split(',').filter(|item| !item.is_empty()) {
        let token = match HoldToken::parse(item) {
            Ok(token) => token,
            Err(e) => {
                warn!("Skipping hold token {}: {}", item, e);
                summary.skipped += 1;
                continue;
            }
        };

        match renderer.render(surface, token, session.led_above_hold) {
            Ok(_) => summary.lit += 1,
            Err(e) => {
                warn!("Skipping hold {}: {}", item, e);
                summary.skipped += 1;
            }
        }
    }

    if surface.show().is_err() {
        warn!("LED flush failed after problem");
    }

    session.led_above_hold = false;

    info!(
        "Problem shown: {} holds lit, {} skipped",
        summary.lit, summary.skipped
    );
    summary
}
