//! Same-size image compositing.
//!
//! Every pixel of the output is `blend_pixel(mode, bg(x, y), fg(x, y),
//! opacity)`: the four channels (alpha included) are blended independently
//! with no premultiplication. Inputs are borrowed read-only and a fresh
//! output buffer is returned.
//!
//! # Example
//!
//! ```rust
//! use pixblend_core::{Argb, Image};
//! use pixblend_ops::composite::{composite, composite_opaque};
//! use pixblend_ops::BlendMode;
//!
//! let bg = Image::filled(4, 4, Argb::new(255, 255, 128, 0));
//! let fg = Image::filled(4, 4, Argb::new(255, 128, 128, 128));
//!
//! let out = composite_opaque(&bg, &fg, BlendMode::Multiply).unwrap();
//! assert_eq!(out.pixel(0, 0), Argb::new(255, 128, 64, 0));
//!
//! // Mismatched sizes are rejected.
//! assert!(composite(&bg, &Image::new(2, 2), 1.0, BlendMode::Normal).is_err());
//! ```

use crate::blend::{BlendMode, blend_pixel};
use crate::{CompositeOptions, OpsError, OpsResult};
use pixblend_core::ArgbBuffer;
use tracing::{debug, trace};

/// Fails with [`OpsError::DimensionMismatch`] unless both sizes are equal.
pub(crate) fn ensure_same_size(background: (u32, u32), foreground: (u32, u32)) -> OpsResult<()> {
    if background != foreground {
        debug!(?background, ?foreground, "composite size mismatch");
        return Err(OpsError::DimensionMismatch {
            background,
            foreground,
        });
    }
    Ok(())
}

/// Blends interleaved channel bytes: `out[i] = blend(bg[i], fg[i])`.
///
/// Every channel of an ARGB pixel uses the same formula, so byte slices of
/// whole pixels can be blended without decoding them.
#[cfg_attr(not(feature = "parallel"), allow(dead_code))]
pub(crate) fn blend_bytes(bg: &[u8], fg: &[u8], out: &mut [u8], opacity: f64, mode: BlendMode) {
    debug_assert!(bg.len() == out.len() && fg.len() == out.len());
    for ((o, &s), &d) in out.iter_mut().zip(bg).zip(fg) {
        *o = mode.apply(s, d, opacity);
    }
}

/// Composites `foreground` onto `background` with the given opacity and mode.
///
/// The output has the background's buffer type and the shared dimensions.
///
/// # Errors
///
/// [`OpsError::DimensionMismatch`] if the two inputs differ in width or
/// height. Checked before allocating the output.
pub fn composite<B, F>(background: &B, foreground: &F, opacity: f64, mode: BlendMode) -> OpsResult<B>
where
    B: ArgbBuffer,
    F: ArgbBuffer,
{
    ensure_same_size(background.dimensions(), foreground.dimensions())?;
    let (width, height) = background.dimensions();

    let mut output = B::new_buffer(width, height);
    write_pixels(background, foreground, opacity, mode, &mut output);
    Ok(output)
}

/// [`composite`] at full opacity.
pub fn composite_opaque<B, F>(background: &B, foreground: &F, mode: BlendMode) -> OpsResult<B>
where
    B: ArgbBuffer,
    F: ArgbBuffer,
{
    composite(background, foreground, 1.0, mode)
}

/// [`composite`] with opacity and mode taken from `options`.
pub fn composite_with<B, F>(background: &B, foreground: &F, options: &CompositeOptions) -> OpsResult<B>
where
    B: ArgbBuffer,
    F: ArgbBuffer,
{
    composite(background, foreground, options.opacity, options.mode)
}

/// Composites into a caller-provided buffer instead of allocating one.
///
/// # Errors
///
/// [`OpsError::DimensionMismatch`] if `foreground` differs in size from
/// `background`, [`OpsError::OutputMismatch`] if `output` does. `output` is
/// untouched on error.
pub fn composite_into<B, F, O>(
    background: &B,
    foreground: &F,
    opacity: f64,
    mode: BlendMode,
    output: &mut O,
) -> OpsResult<()>
where
    B: ArgbBuffer,
    F: ArgbBuffer,
    O: ArgbBuffer,
{
    ensure_same_size(background.dimensions(), foreground.dimensions())?;
    let (expected, got) = (background.dimensions(), output.dimensions());
    if expected != got {
        debug!(?expected, output = ?got, "composite_into output size mismatch");
        return Err(OpsError::OutputMismatch {
            expected,
            output: got,
        });
    }
    write_pixels(background, foreground, opacity, mode, output);
    Ok(())
}

fn write_pixels<B, F, O>(background: &B, foreground: &F, opacity: f64, mode: BlendMode, output: &mut O)
where
    B: ArgbBuffer,
    F: ArgbBuffer,
    O: ArgbBuffer,
{
    let (width, height) = background.dimensions();
    trace!(width, height, %mode, opacity, "composite::composite");

    for y in 0..height {
        for x in 0..width {
            let px = blend_pixel(mode, background.argb(x, y), foreground.argb(x, y), opacity);
            output.set_argb(x, y, px);
        }
    }

    debug!(width, height, %mode, opacity, "Composited");
}
