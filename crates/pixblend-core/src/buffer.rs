//! Pixel-grid capability consumed by the compositor.
//!
//! Any storage that can be created at a given size and read/written one ARGB
//! pixel at a time can be blended. [`Image`](crate::Image) is the in-crate
//! implementation; decoders or GPU staging buffers can implement the trait
//! directly and skip a copy.

use crate::Argb;

/// A fixed-size rectangular grid of 8-bit ARGB pixels.
///
/// Coordinates passed to [`argb`](Self::argb) and
/// [`set_argb`](Self::set_argb) are always in bounds when called by
/// `pixblend-ops`; implementations may panic otherwise.
pub trait ArgbBuffer: Sized {
    /// Allocates a buffer of the given size. Initial contents are unspecified.
    fn new_buffer(width: u32, height: u32) -> Self;

    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Reads the pixel at (x, y).
    fn argb(&self, x: u32, y: u32) -> Argb;

    /// Writes the pixel at (x, y).
    fn set_argb(&mut self, x: u32, y: u32, px: Argb);

    /// Returns `(width, height)`.
    #[inline]
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}
