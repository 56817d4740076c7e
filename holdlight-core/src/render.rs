//! Hold renderer
//!
//! Turns one hold token into LED writes. Never flushes: the problem
//! handler shows the frame once all holds are in the buffer.

use core::fmt;

use holdlight_hal::LedSurface;

use crate::config::Palette;
use crate::geometry::{Coordinate, GeometryMapper};
use crate::hold::HoldToken;

/// Why a hold could not be lit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    /// Relocated position is not on the board
    PositionOutOfRange { position: u16, limit: u16 },
    /// LED index is past the end of the strip
    LedOutOfRange { led: u32, len: usize },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::PositionOutOfRange { position, limit } => {
                write!(f, "position {} outside board (0..{})", position, limit)
            }
            RenderError::LedOutOfRange { led, len } => {
                write!(f, "LED {} outside strip (0..{})", led, len)
            }
        }
    }
}

/// What was lit for one hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderedHold {
    /// Token as received
    pub token: HoldToken,
    /// Position after relocation
    pub relocated: u16,
    /// Wall coordinate of the relocated position
    pub coordinate: Coordinate,
    /// LED lit for the hold
    pub led: u32,
    /// Auxiliary LED lit above the hold
    pub above_led: Option<u32>,
}

impl RenderedHold {
    /// Check if the relocation table moved this hold
    pub fn was_relocated(&self) -> bool {
        self.relocated != self.token.position
    }
}

/// Writes holds into an LED frame buffer
#[derive(Debug, Clone)]
pub struct HoldRenderer {
    geometry: GeometryMapper,
    palette: Palette,
}

impl HoldRenderer {
    /// Create a renderer
    pub fn new(geometry: GeometryMapper, palette: Palette) -> Self {
        Self { geometry, palette }
    }

    /// Geometry in use
    pub fn geometry(&self) -> &GeometryMapper {
        &self.geometry
    }

    /// Palette in use
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Light one hold, plus the LED above it when `above_enabled`
    ///
    /// Unknown hold kinds write `color::OFF` and never get an above LED.
    pub fn render<L: LedSurface>(
        &self,
        surface: &mut L,
        token: HoldToken,
        above_enabled: bool,
    ) -> Result<RenderedHold, RenderError> {
        let color = self.palette.color(token.kind);
        let relocated = self.geometry.relocate_hold(token.position);

        if !self.geometry.contains(relocated) {
            return Err(RenderError::PositionOutOfRange {
                position: relocated,
                limit: self.geometry.profile().positions(),
            });
        }

        let led = self.geometry.position_to_led(relocated);
        let index = self.check_led(surface, led)?;
        let coordinate = self.geometry.position_to_coordinates(relocated);

        if relocated != token.position {
            info!(
                "Hold {} relocated to {} ({})",
                token.position, relocated, coordinate
            );
        }

        surface.set_pixel(index, color);

        let above_led = if above_enabled && token.kind.is_known() {
            self.light_above(surface, relocated)
        } else {
            None
        };

        info!(
            "Light hold: {}{} at {} led {} color = {} above = {}",
            token.kind.symbol(),
            token.position,
            coordinate,
            led,
            token.kind.color_name(),
            above_led
        );

        Ok(RenderedHold {
            token,
            relocated,
            coordinate,
            led,
            above_led,
        })
    }

    fn light_above<L: LedSurface>(&self, surface: &mut L, position: u16) -> Option<u32> {
        let offset = self.geometry.above_offset(position);
        if offset == 0 {
            return None;
        }

        // Never crosses a column boundary, so stays on the board
        let above = (position as i32 + offset as i32) as u16;
        let led = self.geometry.position_to_led(above);
        let index = self.check_led(surface, led).ok()?;
        surface.set_pixel(index, self.palette.above);
        Some(led)
    }

    fn check_led<L: LedSurface>(&self, surface: &L, led: u32) -> Result<usize, RenderError> {
        let index = led as usize;
        if index >= surface.len() {
            return Err(RenderError::LedOutOfRange {
                led,
                len: surface.len(),
            });
        }
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BoardKind, BoardProfile, RelocationTable};
    use crate::hold::HoldKind;
    use holdlight_hal::{color, Rgb};

    /// Fixed-size frame buffer without hardware
    struct Frame {
        pixels: [Rgb; 256],
        len: usize,
    }

    impl Frame {
        fn new(len: usize) -> Self {
            Self {
                pixels: [color::OFF; 256],
                len,
            }
        }

        fn lit(&self) -> usize {
            self.pixels.iter().filter(|p| **p != color::OFF).count()
        }
    }

    impl LedSurface for Frame {
        type Error = ();

        fn len(&self) -> usize {
            self.len
        }

        fn set_pixel(&mut self, index: usize, color: Rgb) {
            if index < self.len {
                self.pixels[index] = color;
            }
        }

        fn clear(&mut self, color: Rgb) {
            self.pixels = [color; 256];
        }

        fn show(&mut self) -> Result<(), ()> {
            Ok(())
        }
    }

    fn renderer(relocations: RelocationTable) -> HoldRenderer {
        HoldRenderer::new(
            GeometryMapper::new(BoardProfile::new(BoardKind::Standard), relocations),
            Palette::standard(),
        )
    }

    #[test]
    fn test_render_single_hold() {
        let renderer = renderer(RelocationTable::new());
        let mut frame = Frame::new(198);
        let hold = renderer
            .render(&mut frame, HoldToken::new(HoldKind::Start, 69), false)
            .unwrap();

        assert_eq!(hold.led, 69);
        assert_eq!(hold.above_led, None);
        assert_eq!(hold.coordinate.label().as_str(), "D3");
        assert_eq!(frame.pixels[69], color::GREEN);
        assert_eq!(frame.lit(), 1);
    }

    #[test]
    fn test_render_with_above() {
        let renderer = renderer(RelocationTable::new());
        let mut frame = Frame::new(198);
        let hold = renderer
            .render(&mut frame, HoldToken::new(HoldKind::Start, 69), true)
            .unwrap();

        // Column D is even: the LED above is one lower on the strip
        assert_eq!(hold.above_led, Some(68));
        assert_eq!(frame.pixels[68], color::VIOLET);
        assert_eq!(frame.lit(), 2);
    }

    #[test]
    fn test_no_above_at_column_end() {
        let renderer = renderer(RelocationTable::new());
        let mut frame = Frame::new(198);
        let hold = renderer
            .render(&mut frame, HoldToken::new(HoldKind::End, 17), true)
            .unwrap();
        assert_eq!(hold.above_led, None);
        assert_eq!(frame.lit(), 1);
    }

    #[test]
    fn test_relocated_hold_lights_target() {
        let renderer = renderer(RelocationTable::from_pairs(&[(4, 30)]).unwrap());
        let mut frame = Frame::new(198);
        let hold = renderer
            .render(&mut frame, HoldToken::new(HoldKind::Progress, 4), false)
            .unwrap();

        assert!(hold.was_relocated());
        assert_eq!(hold.relocated, 30);
        assert_eq!(hold.coordinate.label().as_str(), "B6");
        assert_eq!(frame.pixels[30], color::BLUE);
        assert_eq!(frame.pixels[4], color::OFF);
    }

    #[test]
    fn test_unknown_kind_is_inert() {
        let renderer = renderer(RelocationTable::new());
        let mut frame = Frame::new(198);
        let hold = renderer
            .render(&mut frame, HoldToken::new(HoldKind::Unknown('X'), 69), true)
            .unwrap();
        assert_eq!(hold.above_led, None);
        assert_eq!(frame.lit(), 0);
    }

    #[test]
    fn test_out_of_range_position() {
        let renderer = renderer(RelocationTable::new());
        let mut frame = Frame::new(198);
        let result = renderer.render(&mut frame, HoldToken::new(HoldKind::Start, 198), false);
        assert_eq!(
            result,
            Err(RenderError::PositionOutOfRange {
                position: 198,
                limit: 198
            })
        );
        assert_eq!(frame.lit(), 0);
    }

    #[test]
    fn test_strip_too_short() {
        let renderer = renderer(RelocationTable::new());
        let mut frame = Frame::new(100);
        let result = renderer.render(&mut frame, HoldToken::new(HoldKind::Start, 150), false);
        assert_eq!(result, Err(RenderError::LedOutOfRange { led: 150, len: 100 }));
    }
}
