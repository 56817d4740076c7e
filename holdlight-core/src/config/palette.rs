//! Hold colors

use holdlight_hal::{color, Rgb};
use smart_leds::brightness;

use crate::hold::HoldKind;

/// One color per hold kind, plus the above-hold marker
///
/// All colors share one brightness factor, applied once when the palette
/// is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub start: Rgb,
    pub progress: Rgb,
    pub end: Rgb,
    pub left_hand: Rgb,
    pub right_hand: Rgb,
    pub match_hold: Rgb,
    pub foot: Rgb,
    /// Auxiliary LED next to a hold
    pub above: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}

impl Palette {
    /// Full-brightness app colors
    pub const fn standard() -> Self {
        Self {
            start: color::GREEN,
            progress: color::BLUE,
            end: color::RED,
            left_hand: color::PURPLE,
            right_hand: color::BLUE,
            match_hold: color::PINK,
            foot: color::CYAN,
            above: color::VIOLET,
        }
    }

    /// Standard colors scaled to `level` (255 = full)
    pub fn with_brightness(level: u8) -> Self {
        Self::standard().dimmed(level)
    }

    /// Scale every color by `level / 255`
    pub fn dimmed(self, level: u8) -> Self {
        let mut colors = [
            self.start,
            self.progress,
            self.end,
            self.left_hand,
            self.right_hand,
            self.match_hold,
            self.foot,
            self.above,
        ];
        let scaled = brightness(colors.into_iter(), level);
        for (slot, dimmed) in colors.iter_mut().zip(scaled) {
            *slot = dimmed;
        }

        let [start, progress, end, left_hand, right_hand, match_hold, foot, above] = colors;
        Self {
            start,
            progress,
            end,
            left_hand,
            right_hand,
            match_hold,
            foot,
            above,
        }
    }

    /// Color for a hold kind; unknown kinds stay dark
    pub const fn color(&self, kind: HoldKind) -> Rgb {
        match kind {
            HoldKind::Start => self.start,
            HoldKind::Progress => self.progress,
            HoldKind::End => self.end,
            HoldKind::LeftHand => self.left_hand,
            HoldKind::RightHand => self.right_hand,
            HoldKind::Match => self.match_hold,
            HoldKind::Foot => self.foot,
            HoldKind::Unknown(_) => color::OFF,
        }
    }
}
