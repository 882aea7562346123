//! Per-channel blend modes with opacity attenuation.
//!
//! Every mode combines one background channel (`src`) with one foreground
//! channel (`dest`) in three steps:
//!
//! 1. [`attenuate`] pulls `dest` toward mid-gray 128 as opacity drops,
//!    truncating toward zero.
//! 2. [`BlendMode::raw`] applies the mode formula on `src / 255` and
//!    `dest' / 255` and scales back by 255 (Darken, Lighten and Normal work
//!    on the raw integers).
//! 3. [`clamp_channel`] saturates to `[0, 255]` and rounds half-up.
//!
//! Non-finite intermediates from division by zero are not errors: `+inf`
//! saturates to 255, `-inf` to 0 and NaN maps to 0.
//!
//! # Example
//!
//! ```rust
//! use pixblend_ops::blend::{blend, BlendMode};
//!
//! assert_eq!(blend(BlendMode::Multiply, 255, 128, 1.0), 128);
//! assert_eq!(blend(BlendMode::Darken, 10, 200, 1.0), 10);
//!
//! // Zero opacity replaces the foreground with neutral gray.
//! assert_eq!(blend(BlendMode::Normal, 40, 250, 0.0), 128);
//! ```

use crate::OpsError;
use pixblend_core::Argb;
use std::fmt;
use std::str::FromStr;

/// Foreground value every channel is pulled toward at zero opacity.
pub const NEUTRAL: f64 = 128.0;

/// Largest channel value, also the normalization divisor.
pub const CHANNEL_MAX: f64 = 255.0;

/// Blend mode for compositing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum BlendMode {
    /// Foreground replaces background.
    #[default]
    Normal,
    /// Smaller of the two channels.
    Darken,
    /// Product (darkens).
    Multiply,
    /// Darkens by dividing the inverted background by the foreground.
    ColorBurn,
    /// Sum minus one.
    LinearBurn,
    /// Larger of the two channels.
    Lighten,
    /// Inverse of the product of inverses (lightens).
    Screen,
    /// Brightens by dividing the background by the inverted foreground.
    ColorDodge,
    /// Sum (linear dodge).
    Addition,
    /// Multiply or screen depending on the background.
    Overlay,
    /// Gentle contrast driven by the foreground.
    SoftLight,
    /// Multiply or screen depending on the foreground.
    HardLight,
    /// Color burn or color dodge depending on the foreground.
    VividLight,
    /// Linear burn or addition depending on the foreground.
    LinearLight,
    /// Absolute difference.
    Difference,
    /// Background minus foreground.
    Subtract,
    /// Background divided by foreground.
    Divide,
}

impl BlendMode {
    /// All modes in declaration order.
    pub const ALL: [BlendMode; 17] = [
        BlendMode::Normal,
        BlendMode::Darken,
        BlendMode::Multiply,
        BlendMode::ColorBurn,
        BlendMode::LinearBurn,
        BlendMode::Lighten,
        BlendMode::Screen,
        BlendMode::ColorDodge,
        BlendMode::Addition,
        BlendMode::Overlay,
        BlendMode::SoftLight,
        BlendMode::HardLight,
        BlendMode::VividLight,
        BlendMode::LinearLight,
        BlendMode::Difference,
        BlendMode::Subtract,
        BlendMode::Divide,
    ];

    /// Canonical kebab-case name, e.g. `"color-burn"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Darken => "darken",
            Self::Multiply => "multiply",
            Self::ColorBurn => "color-burn",
            Self::LinearBurn => "linear-burn",
            Self::Lighten => "lighten",
            Self::Screen => "screen",
            Self::ColorDodge => "color-dodge",
            Self::Addition => "addition",
            Self::Overlay => "overlay",
            Self::SoftLight => "soft-light",
            Self::HardLight => "hard-light",
            Self::VividLight => "vivid-light",
            Self::LinearLight => "linear-light",
            Self::Difference => "difference",
            Self::Subtract => "subtract",
            Self::Divide => "divide",
        }
    }

    /// Evaluates the mode formula on an already attenuated foreground.
    ///
    /// Returns the unclamped result on the 0..255 scale. `dest` may fall
    /// outside `[0, 255]` when opacity was outside `[0, 1]`.
    ///
    /// ```rust
    /// use pixblend_ops::BlendMode;
    ///
    /// // 300 before clamping
    /// assert!((BlendMode::Addition.raw(200, 100) - 300.0).abs() < 1e-9);
    /// ```
    pub fn raw(self, src: i32, dest: i32) -> f64 {
        let s = src as f64 / CHANNEL_MAX;
        let d = dest as f64 / CHANNEL_MAX;

        // Operand order matters for bit-exact results.
        match self {
            Self::Normal => dest as f64,
            Self::Darken => src.min(dest) as f64,
            Self::Lighten => src.max(dest) as f64,
            Self::Multiply => (d * s) * CHANNEL_MAX,
            Self::ColorBurn => {
                if d == 0.0 {
                    0.0
                } else {
                    (1.0 - ((1.0 - s) / d)) * CHANNEL_MAX
                }
            }
            Self::LinearBurn => (s + d - 1.0) * CHANNEL_MAX,
            Self::Screen => (1.0 - ((1.0 - s) * (1.0 - d))) * CHANNEL_MAX,
            Self::ColorDodge => {
                if d >= 1.0 {
                    d * CHANNEL_MAX
                } else {
                    (s / (1.0 - d)) * CHANNEL_MAX
                }
            }
            Self::Addition => (s + d) * CHANNEL_MAX,
            Self::Overlay => {
                if s < 0.5 {
                    (d * s * 2.0) * CHANNEL_MAX
                } else {
                    (1.0 - (2.0 * (1.0 - s) * (1.0 - d))) * CHANNEL_MAX
                }
            }
            Self::SoftLight => ((1.0 - (2.0 * d)) * (s * s) + (2.0 * d * s)) * CHANNEL_MAX,
            Self::HardLight => {
                if d < 0.5 {
                    (d * s * 2.0) * CHANNEL_MAX
                } else {
                    (1.0 - (2.0 * (1.0 - s) * (1.0 - d))) * CHANNEL_MAX
                }
            }
            // d == 0 divides by zero; see clamp_channel for how that resolves.
            Self::VividLight => {
                if d <= 0.5 {
                    (1.0 - ((1.0 - s) / d)) * CHANNEL_MAX
                } else {
                    (s / (1.0 - d)) * CHANNEL_MAX
                }
            }
            Self::LinearLight => {
                if d <= 0.5 {
                    (s + d - 1.0) * CHANNEL_MAX
                } else {
                    (s + d) * CHANNEL_MAX
                }
            }
            Self::Difference => (s - d).abs() * CHANNEL_MAX,
            Self::Subtract => (s - d) * CHANNEL_MAX,
            Self::Divide => (s / d) * CHANNEL_MAX,
        }
    }

    /// Blends one channel. Same as [`blend`].
    #[inline]
    pub fn apply(self, src: u8, dest: u8, opacity: f64) -> u8 {
        clamp_channel(self.raw(src as i32, attenuate(dest, opacity)))
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlendMode {
    type Err = OpsError;

    /// Parses a mode name, ignoring case and `-`, `_` or space separators.
    ///
    /// Also accepts the aliases `add`, `linear-dodge`, `sub` and `diff`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        let mode = match key.as_str() {
            "normal" => Self::Normal,
            "darken" => Self::Darken,
            "multiply" => Self::Multiply,
            "colorburn" => Self::ColorBurn,
            "linearburn" => Self::LinearBurn,
            "lighten" => Self::Lighten,
            "screen" => Self::Screen,
            "colordodge" => Self::ColorDodge,
            "addition" | "add" | "lineardodge" => Self::Addition,
            "overlay" => Self::Overlay,
            "softlight" => Self::SoftLight,
            "hardlight" => Self::HardLight,
            "vividlight" => Self::VividLight,
            "linearlight" => Self::LinearLight,
            "difference" | "diff" => Self::Difference,
            "subtract" | "sub" => Self::Subtract,
            "divide" => Self::Divide,
            _ => return Err(OpsError::UnknownBlendMode(s.to_string())),
        };
        Ok(mode)
    }
}

/// Pulls a foreground channel toward [`NEUTRAL`] according to opacity.
///
/// Computes `128 - 128 * opacity + dest * opacity` and truncates toward
/// zero. Opacity outside `[0, 1]` extrapolates and can leave the channel
/// range; NaN opacity yields 0.
///
/// ```rust
/// use pixblend_ops::blend::attenuate;
///
/// assert_eq!(attenuate(200, 1.0), 200);
/// assert_eq!(attenuate(200, 0.0), 128);
/// assert_eq!(attenuate(255, 0.5), 191); // 191.5 truncated
/// ```
#[inline]
pub fn attenuate(dest: u8, opacity: f64) -> i32 {
    (NEUTRAL - (NEUTRAL * opacity) + (dest as f64 * opacity)) as i32
}

/// Saturates a raw result to `[0, 255]` and rounds half-up.
///
/// NaN maps to 0.
#[inline]
pub fn clamp_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, CHANNEL_MAX).round() as u8
}

/// Blends one background channel with one foreground channel.
///
/// `src` is the background value, `dest` the foreground value, `opacity`
/// the foreground visibility (1.0 = formula applies unmodified).
#[inline]
pub fn blend(mode: BlendMode, src: u8, dest: u8, opacity: f64) -> u8 {
    mode.apply(src, dest, opacity)
}

/// Blends all four channels of a pixel, alpha included.
///
/// ```rust
/// use pixblend_core::Argb;
/// use pixblend_ops::blend::{blend_pixel, BlendMode};
///
/// let bg = Argb::new(255, 100, 100, 100);
/// let fg = Argb::new(255, 150, 50, 100);
/// let out = blend_pixel(BlendMode::Difference, bg, fg, 1.0);
/// assert_eq!(out, Argb::new(0, 50, 50, 0));
/// ```
#[inline]
pub fn blend_pixel(mode: BlendMode, bg: Argb, fg: Argb, opacity: f64) -> Argb {
    bg.zip_map(fg, |s, d| mode.apply(s, d, opacity))
}
