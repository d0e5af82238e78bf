use crate::foundation::core::{Affine, Rect, Rgba8, alpha_to_opacity};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Winding rule for fills and clip paths.
pub enum FillRule {
    /// `evenodd`.
    #[default]
    EvenOdd,
    /// `nonzero`.
    NonZero,
}

impl FillRule {
    /// Instruction keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EvenOdd => "evenodd",
            Self::NonZero => "nonzero",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Coordinate system for clip-path contents.
pub enum ClipUnits {
    /// `userSpace`.
    UserSpace,
    /// `userSpaceOnUse`.
    #[default]
    UserSpaceOnUse,
    /// `objectBoundingBox`: contents are relative to the context's bounds.
    ObjectBoundingBox,
}

impl ClipUnits {
    /// Instruction keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UserSpace => "userSpace",
            Self::UserSpaceOnUse => "userSpaceOnUse",
            Self::ObjectBoundingBox => "objectBoundingBox",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Shape drawn at open stroke ends.
pub enum LineCap {
    /// Flat, flush with the end point.
    #[default]
    Butt,
    /// Half-circle.
    Round,
    /// Flat, extended by half the stroke width.
    Square,
}

impl LineCap {
    /// Instruction keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Shape drawn where stroke segments meet.
pub enum LineJoin {
    /// Sharp corner, limited by the miter limit.
    #[default]
    Miter,
    /// Rounded corner.
    Round,
    /// Cut-off corner.
    Bevel,
}

impl LineJoin {
    /// Instruction keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Font slant.
pub enum FontStyle {
    /// Upright.
    #[default]
    Normal,
    /// Italic face.
    Italic,
    /// Slanted roman face.
    Oblique,
    /// Whatever the font provides.
    Any,
}

impl FontStyle {
    /// Instruction keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
            Self::Oblique => "oblique",
            Self::Any => "any",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Font width.
pub enum FontStretch {
    /// `normal`.
    #[default]
    Normal,
    /// `ultra-condensed`.
    UltraCondensed,
    /// `extra-condensed`.
    ExtraCondensed,
    /// `condensed`.
    Condensed,
    /// `semi-condensed`.
    SemiCondensed,
    /// `semi-expanded`.
    SemiExpanded,
    /// `expanded`.
    Expanded,
    /// `extra-expanded`.
    ExtraExpanded,
    /// `ultra-expanded`.
    UltraExpanded,
    /// Whatever the font provides.
    Any,
}

impl FontStretch {
    /// Instruction keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::UltraCondensed => "ultra-condensed",
            Self::ExtraCondensed => "extra-condensed",
            Self::Condensed => "condensed",
            Self::SemiCondensed => "semi-condensed",
            Self::SemiExpanded => "semi-expanded",
            Self::Expanded => "expanded",
            Self::ExtraExpanded => "extra-expanded",
            Self::UltraExpanded => "ultra-expanded",
            Self::Any => "any",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Line drawn with text.
pub enum TextDecoration {
    /// No decoration.
    #[default]
    None,
    /// Below the baseline.
    Underline,
    /// Above the text.
    Overline,
    /// Through the middle.
    LineThrough,
}

impl TextDecoration {
    /// Instruction keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Underline => "underline",
            Self::Overline => "overline",
            Self::LineThrough => "line-through",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Text placement anchor.
pub enum Gravity {
    #[default]
    /// Not set; emits nothing.
    Undefined,
    /// `NorthWest`.
    NorthWest,
    /// `North`.
    North,
    /// `NorthEast`.
    NorthEast,
    /// `West`.
    West,
    /// `Center`.
    Center,
    /// `East`.
    East,
    /// `SouthWest`.
    SouthWest,
    /// `South`.
    South,
    /// `SouthEast`.
    SouthEast,
    /// No MVG spelling; emits nothing.
    Static,
}

impl Gravity {
    /// Instruction token, or `None` for `Undefined`/`Static`, which have no MVG spelling.
    /// Setting either still updates the context, it just emits nothing.
    pub fn as_mvg(self) -> Option<&'static str> {
        match self {
            Self::NorthWest => Some("NorthWest"),
            Self::North => Some("North"),
            Self::NorthEast => Some("NorthEast"),
            Self::West => Some("West"),
            Self::Center => Some("Center"),
            Self::East => Some("East"),
            Self::SouthWest => Some("SouthWest"),
            Self::South => Some("South"),
            Self::SouthEast => Some("SouthEast"),
            Self::Undefined | Self::Static => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Horizontal text alignment.
pub enum TextAlignment {
    /// Not set; emits nothing.
    #[default]
    Undefined,
    /// `left`.
    Left,
    /// `center`.
    Center,
    /// `right`.
    Right,
}

impl TextAlignment {
    /// Instruction token, or `None` for `Undefined`.
    pub fn as_mvg(self) -> Option<&'static str> {
        match self {
            Self::Left => Some("left"),
            Self::Center => Some("center"),
            Self::Right => Some("right"),
            Self::Undefined => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Text run direction.
pub enum TextDirection {
    /// Not set; emits nothing.
    #[default]
    Undefined,
    /// `left-to-right`.
    LeftToRight,
    /// `right-to-left`.
    RightToLeft,
}

impl TextDirection {
    /// Instruction token, or `None` for `Undefined`.
    pub fn as_mvg(self) -> Option<&'static str> {
        match self {
            Self::LeftToRight => Some("left-to-right"),
            Self::RightToLeft => Some("right-to-left"),
            Self::Undefined => None,
        }
    }
}

/// Snapshot of every inheritable drawing attribute.
///
/// Fill and stroke opacity live in the alpha channel of [`fill`](Self::fill) and
/// [`stroke`](Self::stroke); [`alpha`](Self::alpha) is the general paint opacity that freshly
/// set colors adopt.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GraphicContext {
    /// Fill paint; its alpha is the fill opacity.
    pub fill: Rgba8,
    /// Pattern id used as fill paint, if any.
    pub fill_pattern: Option<String>,
    /// Winding rule for fills.
    pub fill_rule: FillRule,
    /// Stroke paint; its alpha is the stroke opacity.
    pub stroke: Rgba8,
    /// Pattern id used as stroke paint, if any.
    pub stroke_pattern: Option<String>,
    /// Stroke width in user units.
    pub stroke_width: f64,
    /// Dash lengths; empty means solid.
    pub dash_array: Vec<f64>,
    /// Offset into the dash pattern.
    pub dash_offset: f64,
    /// Stroke end shape.
    pub line_cap: LineCap,
    /// Stroke corner shape.
    pub line_join: LineJoin,
    /// Miter length limit.
    pub miter_limit: u32,
    /// Antialias strokes.
    pub stroke_antialias: bool,
    /// General paint opacity as 8-bit alpha.
    pub alpha: u8,

    /// Font name or file.
    pub font: Option<String>,
    /// Font family.
    pub font_family: Option<String>,
    /// Font size in points.
    pub point_size: f64,
    /// Font slant.
    pub font_style: FontStyle,
    /// Font weight (400 is normal).
    pub font_weight: u32,
    /// Font width.
    pub font_stretch: FontStretch,
    /// Antialias text.
    pub text_antialias: bool,
    /// Text decoration.
    pub decoration: TextDecoration,
    /// Box color behind text.
    pub undercolor: Rgba8,
    /// Border color.
    pub border_color: Rgba8,
    /// Text encoding name.
    pub encoding: Option<String>,
    /// Text placement anchor.
    pub gravity: Gravity,
    /// Text alignment.
    pub text_alignment: TextAlignment,
    /// Text direction.
    pub direction: TextDirection,
    /// Extra space between glyphs.
    pub kerning: f64,
    /// Extra space between lines.
    pub interline_spacing: f64,
    /// Extra space between words.
    pub interword_spacing: f64,

    /// Cumulative transform; instructions record only the increments.
    pub affine: Affine,
    /// Active clip-path id.
    pub clip_path: Option<String>,
    /// Winding rule for the clip path.
    pub clip_rule: FillRule,
    /// Coordinate system of clip-path contents.
    pub clip_units: ClipUnits,
    /// Object bounding box used when `clip_units` is object-relative.
    pub bounds: Rect,
}

impl Default for GraphicContext {
    fn default() -> Self {
        Self {
            fill: Rgba8::BLACK,
            fill_pattern: None,
            fill_rule: FillRule::EvenOdd,
            stroke: Rgba8::NONE,
            stroke_pattern: None,
            stroke_width: 1.0,
            dash_array: Vec::new(),
            dash_offset: 0.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            miter_limit: 10,
            stroke_antialias: true,
            alpha: 255,
            font: None,
            font_family: None,
            point_size: 12.0,
            font_style: FontStyle::Normal,
            font_weight: 400,
            font_stretch: FontStretch::Normal,
            text_antialias: true,
            decoration: TextDecoration::None,
            undercolor: Rgba8::NONE,
            border_color: Rgba8::NONE,
            encoding: None,
            gravity: Gravity::Undefined,
            text_alignment: TextAlignment::Undefined,
            direction: TextDirection::Undefined,
            kerning: 0.0,
            interline_spacing: 0.0,
            interword_spacing: 0.0,
            affine: Affine::IDENTITY,
            clip_path: None,
            clip_rule: FillRule::EvenOdd,
            clip_units: ClipUnits::UserSpaceOnUse,
            bounds: Rect::ZERO,
        }
    }
}

impl GraphicContext {
    /// General paint opacity in `[0, 1]`.
    pub fn opacity(&self) -> f64 {
        alpha_to_opacity(self.alpha)
    }

    /// Fill opacity in `[0, 1]`.
    pub fn fill_opacity(&self) -> f64 {
        alpha_to_opacity(self.fill.a)
    }

    /// Stroke opacity in `[0, 1]`.
    pub fn stroke_opacity(&self) -> f64 {
        alpha_to_opacity(self.stroke.a)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/context/graphic.rs"]
mod tests;
