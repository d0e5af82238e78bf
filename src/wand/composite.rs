use crate::{
    foundation::{error::WandResult, number::G4},
    target::encode::base64_lines,
    wand::drawing::DrawingWand,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Compositing operator of an inline `image` primitive.
pub enum CompositeOperator {
    /// Sum of source and destination, wrapping.
    Add,
    /// Source over destination, inside the destination only.
    Atop,
    /// Shade the destination with the source as a bump map.
    Bumpmap,
    /// Clear the covered area.
    Clear,
    /// Colorize (no MVG spelling).
    Colorize,
    /// Replace the destination with the source.
    Copy,
    /// Copy the blue channel.
    CopyBlue,
    /// Copy the green channel.
    CopyGreen,
    /// Copy the opacity channel.
    CopyOpacity,
    /// Copy the red channel.
    CopyRed,
    /// Darken (no MVG spelling).
    Darken,
    /// Absolute difference.
    Difference,
    /// Displace (no MVG spelling).
    Displace,
    /// Dissolve (no MVG spelling).
    Dissolve,
    /// Hue (no MVG spelling).
    Hue,
    /// Source inside the destination.
    In,
    /// Lighten (no MVG spelling).
    Lighten,
    /// Luminize (no MVG spelling).
    Luminize,
    /// Destination minus source.
    Minus,
    /// Modulate (no MVG spelling).
    Modulate,
    /// Product of source and destination.
    Multiply,
    /// No compositing (no MVG spelling).
    No,
    /// Source outside the destination.
    Out,
    /// Source over destination.
    Over,
    /// Overlay (no MVG spelling).
    Overlay,
    /// Sum of source and destination, clamped.
    Plus,
    /// Saturate (no MVG spelling).
    Saturate,
    /// Screen (no MVG spelling).
    Screen,
    /// Source minus destination, wrapping.
    Subtract,
    /// Threshold blend.
    Threshold,
    /// Source or destination, not both.
    Xor,
}

impl CompositeOperator {
    /// Instruction mnemonic. Operators the rasterizer has no spelling for degrade to
    /// `<name>_not_supported` instead of failing.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Atop => "atop",
            Self::Bumpmap => "bumpmap",
            Self::Clear => "clear",
            Self::Colorize => "colorize_not_supported",
            Self::Copy => "copy",
            Self::CopyBlue => "copyblue",
            Self::CopyGreen => "copygreen",
            Self::CopyOpacity => "copyopacity",
            Self::CopyRed => "copyred",
            Self::Darken => "darken_not_supported",
            Self::Difference => "difference",
            Self::Displace => "displace_not_supported",
            Self::Dissolve => "dissolve_not_supported",
            Self::Hue => "hue_not_supported",
            Self::In => "in",
            Self::Lighten => "lighten_not_supported",
            Self::Luminize => "luminize_not_supported",
            Self::Minus => "minus",
            Self::Modulate => "modulate_not_supported",
            Self::Multiply => "multiply",
            Self::No => "no_not_supported",
            Self::Out => "out",
            Self::Over => "over",
            Self::Overlay => "overlay_not_supported",
            Self::Plus => "plus",
            Self::Saturate => "saturate_not_supported",
            Self::Screen => "screen_not_supported",
            Self::Subtract => "subtract",
            Self::Threshold => "threshold",
            Self::Xor => "xor",
        }
    }

    /// `false` for operators that degrade to `*_not_supported`.
    pub fn is_supported(self) -> bool {
        !self.mnemonic().ends_with("_not_supported")
    }
}

impl DrawingWand<'_> {
    /// Inline `image` as base64 data composited at `(x, y)` scaled to `width` x `height`.
    ///
    /// # Panics
    ///
    /// If `width` or `height` is zero.
    #[tracing::instrument(skip(self, image), fields(op = operator.mnemonic()))]
    pub fn composite(
        &mut self,
        operator: CompositeOperator,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        image: &image::DynamicImage,
    ) -> WandResult<()> {
        assert!(
            width != 0.0 && height != 0.0,
            "composite requires a non-zero width and height"
        );
        self.ensure_usable()?;
        if !operator.is_supported() {
            tracing::warn!(
                mode = operator.mnemonic(),
                "composite operator has no instruction spelling"
            );
        }

        let encoded = match self.encoder.encode(image) {
            Ok(encoded) => encoded,
            Err(err) => return Err(self.fail(err)),
        };
        let mut data = base64_lines(&encoded.bytes, self.settings.base64_line_width).join("\n");
        data.push('\n');

        self.emit(format_args!(
            "image {} {},{} {},{} 'data:{};base64,\n{data}'\n",
            operator.mnemonic(),
            G4(x),
            G4(y),
            G4(width),
            G4(height),
            encoded.mime
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wand/composite.rs"]
mod tests;
