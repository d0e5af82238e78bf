use std::fmt;

pub use kurbo::{Affine, Point, Rect};

/// Straight (non-premultiplied) RGBA8 color.
///
/// Fully transparent black doubles as the `none` paint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; 255 is opaque.
    pub a: u8,
}

impl Rgba8 {
    /// The `none` paint (fully transparent black).
    pub const NONE: Self = Self::rgba(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Color from all four channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// `true` for the fully transparent sentinel, which never takes part in opacity coupling.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// `true` only for [`Rgba8::NONE`].
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Same color with alpha `a`.
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Renders the MVG color token: `none`, `#RRGGBB` or `#RRGGBBAA`.
impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return f.write_str("none");
        }
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

/// Quantize an opacity in `[0, 1]` to an 8-bit alpha channel.
pub fn opacity_to_alpha(opacity: f64) -> u8 {
    if opacity.is_nan() {
        return 0;
    }
    (opacity.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Inverse of [`opacity_to_alpha`].
pub fn alpha_to_opacity(alpha: u8) -> f64 {
    f64::from(alpha) / 255.0
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
