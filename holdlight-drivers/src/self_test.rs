//! Boot LED check
//!
//! Runs a single dot along the whole strip once per color, then clears.
//! A dead LED or a broken data line shows up as the dot stopping early;
//! a swapped color channel shows up as the wrong color.
//!
//! [`Chase`] only draws frames. The caller flushes each one to the strip
//! and waits [`DEFAULT_STEP_MS`] (or its own step time) in between.

use holdlight_hal::{color, LedSurface, Rgb};

/// Red, green, blue, then violet
pub const DEFAULT_COLORS: [Rgb; 4] = [color::RED, color::GREEN, color::BLUE, color::VIOLET];

/// Time each LED stays lit
pub const DEFAULT_STEP_MS: u64 = 10;

/// Dot chase over every color, `stride` LEDs per step
pub struct Chase<'a> {
    colors: &'a [Rgb],
    stride: usize,
    color: usize,
    index: usize,
    done: bool,
}

impl<'a> Chase<'a> {
    /// A `stride` of 0 is treated as 1
    pub const fn new(colors: &'a [Rgb], stride: usize) -> Self {
        Self {
            colors,
            stride: if stride == 0 { 1 } else { stride },
            color: 0,
            index: 0,
            done: false,
        }
    }

    /// Draw and show the next frame
    ///
    /// Returns `Ok(false)` once the chase is over; that last call leaves
    /// the strip cleared and shown.
    pub fn step<L: LedSurface>(&mut self, surface: &mut L) -> Result<bool, L::Error> {
        if self.done {
            return Ok(false);
        }

        if self.index >= surface.len() {
            self.color += 1;
            self.index = 0;
        }

        let Some(dot) = self.colors.get(self.color).filter(|_| !surface.is_empty()) else {
            self.done = true;
            surface.clear(color::OFF);
            surface.show()?;
            return Ok(false);
        };

        surface.clear(color::OFF);
        surface.set_pixel(self.index, *dot);
        surface.show()?;
        self.index += self.stride;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    /// Surface remembering the lit pixel of every flushed frame
    struct MockStrip {
        len: usize,
        pixels: [Rgb; 8],
        shown: Vec<Option<(usize, Rgb)>, 64>,
    }

    impl MockStrip {
        fn new(len: usize) -> Self {
            Self {
                len,
                pixels: [color::OFF; 8],
                shown: Vec::new(),
            }
        }
    }

    impl LedSurface for MockStrip {
        type Error = ();

        fn len(&self) -> usize {
            self.len
        }

        fn set_pixel(&mut self, index: usize, pixel: Rgb) {
            if index < self.len {
                self.pixels[index] = pixel;
            }
        }

        fn clear(&mut self, pixel: Rgb) {
            self.pixels = [pixel; 8];
        }

        fn show(&mut self) -> Result<(), ()> {
            let lit = self
                .pixels
                .iter()
                .copied()
                .enumerate()
                .find(|(_, p)| *p != color::OFF);
            self.shown.push(lit).map_err(|_| ())
        }
    }

    fn run(strip: &mut MockStrip, colors: &[Rgb], stride: usize) -> usize {
        let mut chase = Chase::new(colors, stride);
        let mut steps = 0;
        while chase.step(strip).unwrap() {
            steps += 1;
        }
        steps
    }

    #[test]
    fn test_chase_every_led_then_clear() {
        let mut strip = MockStrip::new(3);
        let steps = run(&mut strip, &DEFAULT_COLORS, 1);

        // 4 colors x 3 LEDs, plus the final clear
        assert_eq!(steps, 12);
        assert_eq!(strip.shown.len(), 13);
        assert_eq!(strip.shown[0], Some((0, color::RED)));
        assert_eq!(strip.shown[2], Some((2, color::RED)));
        assert_eq!(strip.shown[3], Some((0, color::GREEN)));
        assert_eq!(strip.shown[11], Some((2, color::VIOLET)));
        assert_eq!(strip.shown[12], None);
    }

    #[test]
    fn test_stride_skips_leds() {
        let mut strip = MockStrip::new(5);
        run(&mut strip, &[color::BLUE], 2);

        assert_eq!(
            strip.shown.as_slice(),
            &[
                Some((0, color::BLUE)),
                Some((2, color::BLUE)),
                Some((4, color::BLUE)),
                None
            ]
        );
    }

    #[test]
    fn test_no_colors_just_clears() {
        let mut strip = MockStrip::new(4);
        assert_eq!(run(&mut strip, &[], 0), 0);
        assert_eq!(strip.shown.as_slice(), &[None]);
    }

    #[test]
    fn test_empty_strip_just_clears() {
        let mut strip = MockStrip::new(0);
        assert_eq!(run(&mut strip, &DEFAULT_COLORS, 1), 0);
        assert_eq!(strip.shown.as_slice(), &[None]);
    }

    #[test]
    fn test_finished_chase_stays_finished() {
        let mut strip = MockStrip::new(1);
        let mut chase = Chase::new(&[color::RED], 1);
        assert_eq!(chase.step(&mut strip), Ok(true));
        assert_eq!(chase.step(&mut strip), Ok(false));
        assert_eq!(chase.step(&mut strip), Ok(false));
        assert_eq!(strip.shown.len(), 2);
    }
}
