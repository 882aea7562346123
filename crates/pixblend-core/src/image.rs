//! In-memory 8-bit ARGB image buffer.
//!
//! # Memory Layout
//!
//! Pixels are stored in **row-major** order, top-to-bottom, four interleaved
//! bytes per pixel in alpha, red, green, blue order:
//!
//! ```text
//! Memory: [A R G B A R G B ...]  <- Row 0
//!         [A R G B A R G B ...]  <- Row 1
//!         ...
//! ```
//!
//! # Usage
//!
//! ```rust
//! use pixblend_core::{Argb, Image};
//!
//! let mut img = Image::new(64, 32);
//! img.set_pixel(10, 5, Argb::opaque(255, 128, 0));
//!
//! let px = img.pixel(10, 5);
//! assert_eq!(px.r, 255);
//! assert_eq!(img.pixel(0, 0), Argb::TRANSPARENT);
//! ```
//!
//! # Dependencies
//!
//! - [`crate::pixel::Argb`] - pixel value type
//! - [`crate::buffer::ArgbBuffer`] - capability trait implemented here
//! - [`crate::error::Error`] - construction and bounds errors

use crate::pixel::CHANNELS;
use crate::{Argb, ArgbBuffer, Error, Result};
use std::sync::Arc;

/// Owned ARGB image buffer.
///
/// The byte buffer lives in an [`Arc<Vec<u8>>`], so cloning is cheap and
/// mutation is copy-on-write. A clone handed to another thread never observes
/// later writes to the original.
///
/// # Example
///
/// ```rust
/// use pixblend_core::{Argb, Image};
///
/// let red = Argb::opaque(255, 0, 0);
/// let img = Image::filled(4, 4, red);
/// assert!(img.pixels().all(|(_, _, px)| px == red));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Image {
    data: Arc<Vec<u8>>,
    width: u32,
    height: u32,
}

impl Image {
    /// Creates a new image filled with zeros (transparent black).
    ///
    /// ```rust
    /// use pixblend_core::Image;
    ///
    /// let img = Image::new(1920, 1080);
    /// assert_eq!(img.dimensions(), (1920, 1080));
    /// ```
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * CHANNELS;
        Self {
            data: Arc::new(vec![0u8; len]),
            width,
            height,
        }
    }

    /// Creates an image filled with a single pixel value.
    pub fn filled(width: u32, height: u32, pixel: Argb) -> Self {
        let count = width as usize * height as usize;
        let mut data = Vec::with_capacity(count * CHANNELS);
        for _ in 0..count {
            data.extend_from_slice(&pixel.to_array());
        }
        Self {
            data: Arc::new(data),
            width,
            height,
        }
    }

    /// Creates an image from interleaved ARGB bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len()` is not
    /// `width * height * 4`.
    ///
    /// ```rust
    /// use pixblend_core::Image;
    ///
    /// let img = Image::from_data(2, 1, vec![255, 1, 2, 3, 255, 4, 5, 6]).unwrap();
    /// assert_eq!(img.pixel(1, 0).b, 6);
    /// assert!(Image::from_data(2, 2, vec![0; 3]).is_err());
    /// ```
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data: Arc::new(data),
            width,
            height,
        })
    }

    /// Creates an image from packed `0xAARRGGBB` pixels in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `pixels.len()` is not
    /// `width * height`.
    pub fn from_argb_u32(width: u32, height: u32, pixels: &[u32]) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} pixels, got {}", expected, pixels.len()),
            ));
        }
        let mut data = Vec::with_capacity(expected * CHANNELS);
        for &packed in pixels {
            data.extend_from_slice(&Argb::from_u32(packed).to_array());
        }
        Ok(Self {
            data: Arc::new(data),
            width,
            height,
        })
    }

    /// Returns every pixel packed as `0xAARRGGBB`, row-major.
    pub fn to_argb_u32(&self) -> Vec<u32> {
        self.data
            .chunks_exact(CHANNELS)
            .map(|c| Argb::new(c[0], c[1], c[2], c[3]).to_u32())
            .collect()
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if the image has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// Returns the raw interleaved ARGB bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the raw bytes mutably.
    ///
    /// If the buffer is shared with a clone, it is copied first.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        Arc::make_mut(&mut self.data).as_mut_slice()
    }

    /// Consumes the image and returns its bytes, copying only if shared.
    pub fn into_data(self) -> Vec<u8> {
        Arc::try_unwrap(self.data).unwrap_or_else(|shared| (*shared).clone())
    }

    #[inline]
    fn pixel_offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Returns the pixel at (x, y).
    ///
    /// Use [`get_pixel`](Self::get_pixel) or [`try_pixel`](Self::try_pixel)
    /// for checked access.
    ///
    /// # Panics
    ///
    /// Debug builds panic if (x, y) is out of bounds. Release builds only
    /// check the byte offset: an `x` past the row end reads an unspecified
    /// pixel, and an offset past the buffer end panics.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Argb {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let o = self.pixel_offset(x, y);
        Argb::new(self.data[o], self.data[o + 1], self.data[o + 2], self.data[o + 3])
    }

    /// Returns the pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Argb> {
        if x < self.width && y < self.height {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if (x, y) is outside the image.
    pub fn try_pixel(&self, x: u32, y: u32) -> Result<Argb> {
        self.get_pixel(x, y)
            .ok_or_else(|| Error::out_of_bounds(x, y, self.width, self.height))
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Debug builds panic if (x, y) is out of bounds. Release builds only
    /// check the byte offset: an `x` past the row end overwrites an
    /// unspecified pixel, and an offset past the buffer end panics.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Argb) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let o = self.pixel_offset(x, y);
        let data = Arc::make_mut(&mut self.data);
        data[o..o + CHANNELS].copy_from_slice(&pixel.to_array());
    }

    /// Fills the entire image with a pixel value.
    pub fn fill(&mut self, pixel: Argb) {
        let bytes = pixel.to_array();
        let data = Arc::make_mut(&mut self.data);
        for chunk in data.chunks_exact_mut(CHANNELS) {
            chunk.copy_from_slice(&bytes);
        }
    }

    /// Returns a row of interleaved bytes.
    ///
    /// # Panics
    ///
    /// Panics if y >= height.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        debug_assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.stride();
        &self.data[start..start + self.stride()]
    }

    /// Returns a mutable row of interleaved bytes.
    ///
    /// # Panics
    ///
    /// Panics if y >= height.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        debug_assert!(y < self.height, "row out of bounds");
        let stride = self.stride();
        let start = y as usize * stride;
        &mut self.data_mut()[start..start + stride]
    }

    /// Iterates over all pixels with their coordinates, row-major.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Argb)> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| (x, y, self.pixel(x, y))))
    }

    /// Applies a function to each pixel in place.
    ///
    /// ```rust
    /// use pixblend_core::{Argb, Image};
    ///
    /// let mut img = Image::filled(3, 3, Argb::splat(100));
    /// img.map_pixels(|px| px.map_channels(|c| c / 2));
    /// assert_eq!(img.pixel(2, 2), Argb::splat(50));
    /// ```
    pub fn map_pixels<F>(&mut self, f: F)
    where
        F: Fn(Argb) -> Argb,
    {
        let data = Arc::make_mut(&mut self.data);
        for chunk in data.chunks_exact_mut(CHANNELS) {
            let px = Argb::new(chunk[0], chunk[1], chunk[2], chunk[3]);
            chunk.copy_from_slice(&f(px).to_array());
        }
    }
}

impl ArgbBuffer for Image {
    #[inline]
    fn new_buffer(width: u32, height: u32) -> Self {
        Image::new(width, height)
    }

    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn argb(&self, x: u32, y: u32) -> Argb {
        self.pixel(x, y)
    }

    #[inline]
    fn set_argb(&mut self, x: u32, y: u32, px: Argb) {
        self.set_pixel(x, y, px);
    }
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &CHANNELS)
            .finish()
    }
}
