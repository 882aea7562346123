//! # pixblend-ops
//!
//! Photoshop-style blend modes over 8-bit ARGB channels, with opacity, and a
//! compositor that applies a mode to every pixel of two same-size images.
//!
//! # Modules
//!
//! - [`blend`] - the 17 per-channel blend formulas and opacity attenuation
//! - [`composite`] - sequential compositor, generic over [`ArgbBuffer`]
//! - [`parallel`] - Rayon compositor for [`Image`] (feature `parallel`)
//! - [`options`] - [`CompositeOptions`] configuration value
//!
//! # Example
//!
//! ```rust
//! use pixblend_core::{Argb, Image};
//! use pixblend_ops::{blend, composite, BlendMode};
//!
//! // Single channel
//! assert_eq!(blend(BlendMode::Difference, 100, 150, 1.0), 50);
//!
//! // Whole image
//! let bg = Image::filled(8, 8, Argb::opaque(255, 128, 0));
//! let fg = Image::filled(8, 8, Argb::opaque(0, 128, 255));
//! let out = composite(&bg, &fg, 0.5, BlendMode::Screen).unwrap();
//! assert_eq!(out.dimensions(), (8, 8));
//! ```
//!
//! # Numeric Contract
//!
//! The foreground channel is first attenuated toward 128 by opacity and
//! truncated; the formula result is then clamped to `[0, 255]` and rounded
//! half-up. Division by zero resolves through clamping (`+inf` to 255,
//! `-inf` to 0, NaN to 0), so every call returns a valid channel.
//!
//! # Feature Flags
//!
//! - `parallel` (default) - [`parallel`] module backed by Rayon
//! - `serde` - Serialize/Deserialize for [`BlendMode`] and [`CompositeOptions`]
//!
//! [`ArgbBuffer`]: pixblend_core::ArgbBuffer
//! [`Image`]: pixblend_core::Image

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod blend;
pub mod composite;
pub mod options;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use blend::{BlendMode, attenuate, blend, blend_pixel, clamp_channel};
pub use composite::{composite, composite_into, composite_opaque, composite_with};
pub use error::{OpsError, OpsResult};
pub use options::CompositeOptions;
