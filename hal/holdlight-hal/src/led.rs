//! Addressable LED strip abstraction
//!
//! Writes go into a frame buffer owned by the implementation and only
//! become visible on [`LedSurface::show`].

/// 8-bit RGB color re-exported from the `smart_leds` crate
pub type Rgb = smart_leds::RGB8;

/// Named colors used by the wall
pub mod color {
    use smart_leds::colors;

    use super::Rgb;

    /// LED off
    pub const OFF: Rgb = colors::BLACK;
    pub const RED: Rgb = colors::RED;
    pub const GREEN: Rgb = colors::LIME;
    pub const BLUE: Rgb = colors::BLUE;
    pub const VIOLET: Rgb = colors::MAGENTA;
    pub const PURPLE: Rgb = colors::PURPLE;
    pub const PINK: Rgb = colors::DEEP_PINK;
    pub const CYAN: Rgb = colors::CYAN;
}

/// Buffered addressable LED strip
///
/// Indices address physical LEDs on the strip, `0..len()`.
pub trait LedSurface {
    /// Error type for flushing the frame to the hardware
    type Error;

    /// Number of addressable LEDs
    fn len(&self) -> usize;

    /// Check if the strip has no addressable LEDs
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Set one LED in the frame buffer
    ///
    /// Indices outside `0..len()` are ignored.
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Set every LED in the frame buffer to `color`
    fn clear(&mut self, color: Rgb);

    /// Push the frame buffer to the strip
    fn show(&mut self) -> Result<(), Self::Error>;
}
