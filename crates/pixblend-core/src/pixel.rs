//! 8-bit ARGB pixel type.
//!
//! A pixel is four 8-bit channels ordered alpha, red, green, blue. The
//! packed form is a `u32` laid out as `0xAARRGGBB`, the same layout raster
//! APIs commonly use for "int ARGB" images.
//!
//! ```
//! use pixblend_core::Argb;
//!
//! let px = Argb::from_u32(0x80FF4000);
//! assert_eq!(px.a, 0x80);
//! assert_eq!(px.r, 0xFF);
//! assert_eq!(px.g, 0x40);
//! assert_eq!(px.b, 0x00);
//! assert_eq!(px.to_u32(), 0x80FF4000);
//! ```
//!
//! # Used By
//!
//! - [`crate::image::Image`] - stores pixels as interleaved ARGB bytes
//! - `pixblend-ops` - per-channel blending

use std::fmt;

/// Number of channels in an ARGB pixel.
pub const CHANNELS: usize = 4;

/// Channel index of alpha in [`Argb::to_array`].
pub const ALPHA: usize = 0;
/// Channel index of red in [`Argb::to_array`].
pub const RED: usize = 1;
/// Channel index of green in [`Argb::to_array`].
pub const GREEN: usize = 2;
/// Channel index of blue in [`Argb::to_array`].
pub const BLUE: usize = 3;

/// An unpacked 8-bit ARGB pixel.
///
/// # Memory Layout
///
/// `#[repr(C)]` with fields in `a, r, g, b` order, matching the byte order
/// of one pixel inside [`Image`](crate::Image) data.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Argb {
    /// Alpha channel value.
    pub a: u8,
    /// Red channel value.
    pub r: u8,
    /// Green channel value.
    pub g: u8,
    /// Blue channel value.
    pub b: u8,
}

impl Argb {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(255, 0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Creates a pixel from its channels.
    #[inline]
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Creates an opaque pixel.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(255, r, g, b)
    }

    /// Creates a pixel with every channel set to `v`.
    #[inline]
    pub const fn splat(v: u8) -> Self {
        Self::new(v, v, v, v)
    }

    /// Unpacks a `0xAARRGGBB` value.
    #[inline]
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            a: ((packed >> 24) & 0xFF) as u8,
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }

    /// Packs into a `0xAARRGGBB` value.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Channels as `[a, r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [u8; CHANNELS] {
        [self.a, self.r, self.g, self.b]
    }

    /// Creates from `[a, r, g, b]`.
    #[inline]
    pub const fn from_array(arr: [u8; CHANNELS]) -> Self {
        Self::new(arr[ALPHA], arr[RED], arr[GREEN], arr[BLUE])
    }

    /// Same as [`to_array`](Self::to_array).
    #[inline]
    pub const fn channels(self) -> [u8; CHANNELS] {
        self.to_array()
    }

    /// Applies `f` to each channel independently.
    #[inline]
    pub fn map_channels<F: Fn(u8) -> u8>(self, f: F) -> Self {
        Self::new(f(self.a), f(self.r), f(self.g), f(self.b))
    }

    /// Combines matching channels of `self` and `other` with `f`.
    ///
    /// `f` receives `(self_channel, other_channel)`.
    #[inline]
    pub fn zip_map<F: Fn(u8, u8) -> u8>(self, other: Self, f: F) -> Self {
        Self::new(
            f(self.a, other.a),
            f(self.r, other.r),
            f(self.g, other.g),
            f(self.b, other.b),
        )
    }
}

impl From<u32> for Argb {
    #[inline]
    fn from(packed: u32) -> Self {
        Self::from_u32(packed)
    }
}

impl From<Argb> for u32 {
    #[inline]
    fn from(px: Argb) -> Self {
        px.to_u32()
    }
}

impl From<[u8; CHANNELS]> for Argb {
    #[inline]
    fn from(arr: [u8; CHANNELS]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Argb> for [u8; CHANNELS] {
    #[inline]
    fn from(px: Argb) -> Self {
        px.to_array()
    }
}

impl fmt::Debug for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Argb(#{:08X})", self.to_u32())
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ARGB({}, {}, {}, {})", self.a, self.r, self.g, self.b)
    }
}
