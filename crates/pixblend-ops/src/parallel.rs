//! Parallel compositing using Rayon.
//!
//! Produces exactly the same pixels as [`crate::composite::composite`].
//! The output buffer is split into disjoint rows and each row is written by
//! one worker, so no synchronization beyond Rayon's join is needed.
//!
//! # Example
//!
//! ```rust
//! use pixblend_core::{Argb, Image};
//! use pixblend_ops::{parallel, BlendMode};
//!
//! let bg = Image::filled(256, 256, Argb::splat(200));
//! let fg = Image::filled(256, 256, Argb::splat(100));
//! let out = parallel::composite(&bg, &fg, 1.0, BlendMode::Subtract).unwrap();
//! assert_eq!(out.pixel(255, 255), Argb::splat(100));
//! ```

use crate::blend::BlendMode;
use crate::composite::{blend_bytes, ensure_same_size};
use crate::{CompositeOptions, OpsResult};
use pixblend_core::Image;
use rayon::prelude::*;
use tracing::{debug, trace};

/// Parallel version of [`crate::composite::composite`] for [`Image`].
///
/// # Errors
///
/// [`OpsError::DimensionMismatch`](crate::OpsError::DimensionMismatch) if
/// the inputs differ in width or height.
pub fn composite(
    background: &Image,
    foreground: &Image,
    opacity: f64,
    mode: BlendMode,
) -> OpsResult<Image> {
    ensure_same_size(background.dimensions(), foreground.dimensions())?;
    let (width, height) = background.dimensions();
    trace!(width, height, %mode, opacity, "parallel::composite");

    let mut output = Image::new(width, height);
    if output.is_empty() {
        return Ok(output);
    }

    let stride = background.stride();
    output
        .data_mut()
        .par_chunks_mut(stride)
        .zip(background.data().par_chunks(stride))
        .zip(foreground.data().par_chunks(stride))
        .for_each(|((out, bg), fg)| blend_bytes(bg, fg, out, opacity, mode));

    debug!(width, height, %mode, opacity, "Composited in parallel");
    Ok(output)
}

/// Parallel [`crate::composite::composite_opaque`].
pub fn composite_opaque(background: &Image, foreground: &Image, mode: BlendMode) -> OpsResult<Image> {
    composite(background, foreground, 1.0, mode)
}

/// Parallel [`crate::composite::composite_with`].
pub fn composite_with(
    background: &Image,
    foreground: &Image,
    options: &CompositeOptions,
) -> OpsResult<Image> {
    composite(background, foreground, options.opacity, options.mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpsError;
    use pixblend_core::Argb;

    fn noise(width: u32, height: u32, mut state: u32) -> Image {
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height * 4 {
            // xorshift32
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            data.push((state >> 24) as u8);
        }
        Image::from_data(width, height, data).unwrap()
    }

    #[test]
    fn test_matches_sequential() {
        let bg = noise(33, 17, 0x1234_5678);
        let fg = noise(33, 17, 0x9E37_79B9);
        for mode in BlendMode::ALL {
            for opacity in [0.0, 0.35, 1.0] {
                let seq = crate::composite::composite(&bg, &fg, opacity, mode).unwrap();
                let par = composite(&bg, &fg, opacity, mode).unwrap();
                assert_eq!(seq, par, "{mode} @ {opacity}");
            }
        }
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = composite(&Image::new(8, 8), &Image::new(8, 9), 1.0, BlendMode::Normal);
        assert!(matches!(err, Err(OpsError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_empty() {
        let out = composite(&Image::new(0, 5), &Image::new(0, 5), 1.0, BlendMode::Screen).unwrap();
        assert_eq!(out.dimensions(), (0, 5));
    }

    #[test]
    fn test_options() {
        let bg = Image::filled(4, 4, Argb::splat(10));
        let fg = Image::filled(4, 4, Argb::splat(200));
        let out = composite_with(&bg, &fg, &CompositeOptions::opaque(BlendMode::Lighten)).unwrap();
        assert_eq!(out, Image::filled(4, 4, Argb::splat(200)));
        assert_eq!(out, composite_opaque(&bg, &fg, BlendMode::Lighten).unwrap());
    }
}
