//! # pixblend-core
//!
//! Core types for 8-bit blend-mode compositing.
//!
//! - [`Argb`] - one pixel, four 8-bit channels (alpha, red, green, blue)
//! - [`Image`] - owned row-major ARGB buffer with copy-on-write cloning
//! - [`ArgbBuffer`] - the pixel-grid capability the compositor is generic over
//! - [`Error`] - buffer construction and access errors
//!
//! ## Crate Structure
//!
//! ```text
//! pixblend-core (this crate)
//!    ^
//!    |
//!    +-- pixblend-ops (blend formulas, compositor)
//!    +-- pixblend-tests, pixblend-bench
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize/Deserialize for [`Argb`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod image;
pub mod pixel;

pub use buffer::ArgbBuffer;
pub use error::{Error, Result};
pub use image::Image;
pub use pixel::{Argb, CHANNELS};

/// Prelude module for convenient imports.
///
/// ```
/// use pixblend_core::prelude::*;
///
/// let img = Image::filled(2, 2, Argb::WHITE);
/// assert_eq!(ArgbBuffer::width(&img), 2);
/// ```
pub mod prelude {
    pub use crate::buffer::ArgbBuffer;
    pub use crate::error::{Error, Result};
    pub use crate::image::Image;
    pub use crate::pixel::{ALPHA, Argb, BLUE, CHANNELS, GREEN, RED};
}
