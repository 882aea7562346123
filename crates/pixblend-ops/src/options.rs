//! Composite configuration.
//!
//! ```rust
//! use pixblend_ops::{BlendMode, CompositeOptions};
//!
//! let opts = CompositeOptions::default()
//!     .with_mode(BlendMode::Screen)
//!     .with_opacity(0.75);
//! assert_eq!(opts.mode, BlendMode::Screen);
//! ```

use crate::BlendMode;

/// Opacity and blend mode for one composite call.
///
/// Defaults to fully opaque [`BlendMode::Normal`]. Opacity is not validated;
/// values outside `[0, 1]` extrapolate the attenuation step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CompositeOptions {
    /// Foreground visibility, 0.0 transparent to 1.0 opaque.
    pub opacity: f64,
    /// Per-channel blend formula.
    pub mode: BlendMode,
}

impl CompositeOptions {
    /// Creates options from opacity and mode.
    pub const fn new(opacity: f64, mode: BlendMode) -> Self {
        Self { opacity, mode }
    }

    /// Fully opaque options for `mode`.
    pub const fn opaque(mode: BlendMode) -> Self {
        Self::new(1.0, mode)
    }

    /// Returns a copy with the given opacity.
    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Returns a copy with the given mode.
    pub const fn with_mode(mut self, mode: BlendMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Default for CompositeOptions {
    fn default() -> Self {
        Self::opaque(BlendMode::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = CompositeOptions::default();
        assert_eq!(opts.opacity, 1.0);
        assert_eq!(opts.mode, BlendMode::Normal);
    }

    #[test]
    fn test_builders() {
        let opts = CompositeOptions::opaque(BlendMode::Divide).with_opacity(0.25);
        assert_eq!(opts, CompositeOptions::new(0.25, BlendMode::Divide));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_partial() {
        let opts: CompositeOptions = serde_json::from_str(r#"{"mode":"hard-light"}"#).unwrap();
        assert_eq!(opts, CompositeOptions::opaque(BlendMode::HardLight));

        let json = serde_json::to_string(&CompositeOptions::new(0.5, BlendMode::Overlay)).unwrap();
        assert_eq!(json, r#"{"opacity":0.5,"mode":"overlay"}"#);
    }
}
