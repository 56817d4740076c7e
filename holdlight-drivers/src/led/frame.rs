//! Frame buffer for DMA-driven WS2812 strips
//!
//! The strip itself is written asynchronously (for example by
//! `embassy_rp::pio_programs::ws2812::PioWs2812`), so [`LedSurface::show`]
//! only marks the buffer ready. The firmware collects it with
//! [`StripFrame::take`] and hands it to the driver.

use core::convert::Infallible;

use holdlight_hal::{color, LedSurface, Rgb};

/// Pixel buffer of `N` LEDs, of which the first `len` are addressable
///
/// LEDs past `len` stay off so a fixed-size driver can always send all `N`.
pub struct StripFrame<const N: usize> {
    pixels: [Rgb; N],
    len: usize,
    ready: bool,
}

impl<const N: usize> StripFrame<N> {
    /// Create a dark frame; `len` is capped at `N`
    pub const fn new(len: usize) -> Self {
        Self {
            pixels: [color::OFF; N],
            len: if len < N { len } else { N },
            ready: false,
        }
    }

    /// Addressable part of the buffer
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels[..self.len]
    }

    /// Check if a shown frame is waiting to be sent
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Collect the last shown frame
    ///
    /// Returns `None` if nothing was shown since the previous call. Several
    /// shows in between collapse into the latest one.
    pub fn take(&mut self) -> Option<&[Rgb; N]> {
        if !self.ready {
            return None;
        }
        self.ready = false;
        Some(&self.pixels)
    }
}

impl<const N: usize> LedSurface for StripFrame<N> {
    type Error = Infallible;

    fn len(&self) -> usize {
        self.len
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if index < self.len {
            self.pixels[index] = color;
        }
    }

    fn clear(&mut self, color: Rgb) {
        self.pixels[..self.len].fill(color);
    }

    fn show(&mut self) -> Result<(), Infallible> {
        self.ready = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_is_capped() {
        let frame: StripFrame<8> = StripFrame::new(20);
        assert_eq!(frame.len(), 8);
        let frame: StripFrame<8> = StripFrame::new(3);
        assert_eq!(frame.len(), 3);
        assert_eq!(frame.pixels(), &[color::OFF; 3]);
    }

    #[test]
    fn test_nothing_to_take_before_show() {
        let mut frame: StripFrame<4> = StripFrame::new(4);
        frame.set_pixel(1, color::RED);
        assert!(!frame.is_ready());
        assert!(frame.take().is_none());
    }

    #[test]
    fn test_take_returns_last_shown_frame_once() {
        let mut frame: StripFrame<4> = StripFrame::new(4);
        frame.set_pixel(1, color::RED);
        frame.show().unwrap();
        frame.clear(color::OFF);
        frame.set_pixel(2, color::GREEN);
        frame.show().unwrap();

        assert_eq!(
            frame.take(),
            Some(&[color::OFF, color::OFF, color::GREEN, color::OFF])
        );
        assert!(frame.take().is_none());
    }

    #[test]
    fn test_tail_past_len_stays_dark() {
        let mut frame: StripFrame<4> = StripFrame::new(2);
        frame.set_pixel(3, color::BLUE);
        frame.clear(color::CYAN);
        frame.show().unwrap();

        assert_eq!(
            frame.take(),
            Some(&[color::CYAN, color::CYAN, color::OFF, color::OFF])
        );
    }
}
