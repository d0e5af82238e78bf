use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use anyhow::Context as _;

use crate::{
    context::graphic::{
        ClipUnits, FillRule, FontStretch, FontStyle, Gravity, LineCap, LineJoin, TextAlignment,
        TextDecoration, TextDirection,
    },
    foundation::{
        core::{Affine, Point, Rect, Rgba8},
        error::{WandError, WandResult},
    },
    path::state::PathMode,
    wand::{composite::CompositeOperator, drawing::DrawingWand, primitives::PaintMethod},
};

fn absolute() -> PathMode {
    PathMode::Absolute
}

/// One serialized wand call. Scripts are JSON arrays of these, tagged by `"op"`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    /// [`DrawingWand::push_graphic_context`].
    PushGraphicContext,
    /// [`DrawingWand::pop_graphic_context`].
    PopGraphicContext,
    /// [`DrawingWand::comment`].
    Comment {
        /// Text to write.
        text: String,
    },

    // Paint
    /// [`DrawingWand::set_fill_color`].
    FillColor {
        /// Color name.
        color: String,
    },
    /// [`DrawingWand::set_fill_rgba`].
    FillRgba {
        /// Color value.
        color: Rgba8,
    },
    /// [`DrawingWand::set_fill_pattern_url`].
    FillPatternUrl {
        /// Pattern reference, `#id`.
        url: String,
    },
    /// [`DrawingWand::set_fill_opacity`].
    FillOpacity {
        /// Opacity in `[0, 1]`.
        opacity: f64,
    },
    /// [`DrawingWand::set_fill_rule`].
    FillRule {
        /// Winding rule.
        rule: FillRule,
    },
    /// [`DrawingWand::set_opacity`].
    Opacity {
        /// Opacity in `[0, 1]`.
        opacity: f64,
    },
    /// [`DrawingWand::set_stroke_color`].
    StrokeColor {
        /// Color name.
        color: String,
    },
    /// [`DrawingWand::set_stroke_rgba`].
    StrokeRgba {
        /// Color value.
        color: Rgba8,
    },
    /// [`DrawingWand::set_stroke_pattern_url`].
    StrokePatternUrl {
        /// Pattern reference, `#id`.
        url: String,
    },
    /// [`DrawingWand::set_stroke_opacity`].
    StrokeOpacity {
        /// Opacity in `[0, 1]`.
        opacity: f64,
    },
    /// [`DrawingWand::set_stroke_width`].
    StrokeWidth {
        /// Width.
        width: f64,
    },
    /// [`DrawingWand::set_stroke_dash_array`].
    StrokeDashArray {
        /// Dash lengths; empty means solid.
        #[serde(default)]
        dashes: Vec<f64>,
    },
    /// [`DrawingWand::set_stroke_dash_offset`].
    StrokeDashOffset {
        /// Dash offset.
        offset: f64,
    },
    /// [`DrawingWand::set_stroke_line_cap`].
    StrokeLineCap {
        /// Line cap.
        cap: LineCap,
    },
    /// [`DrawingWand::set_stroke_line_join`].
    StrokeLineJoin {
        /// Line join.
        join: LineJoin,
    },
    /// [`DrawingWand::set_stroke_miter_limit`].
    StrokeMiterLimit {
        /// Miter limit.
        limit: u32,
    },
    /// [`DrawingWand::set_stroke_antialias`].
    StrokeAntialias {
        /// On or off.
        enabled: bool,
    },

    // Clipping
    /// [`DrawingWand::set_clip_path`].
    ClipPath {
        /// Definition id.
        id: String,
    },
    /// [`DrawingWand::set_clip_rule`].
    ClipRule {
        /// Winding rule.
        rule: FillRule,
    },
    /// [`DrawingWand::set_clip_units`].
    ClipUnits {
        /// Clip units.
        units: ClipUnits,
    },
    /// [`DrawingWand::set_object_bounds`].
    ObjectBounds {
        /// First corner x.
        x1: f64,
        /// First corner y.
        y1: f64,
        /// Second corner x.
        x2: f64,
        /// Second corner y.
        y2: f64,
    },

    // Text
    /// [`DrawingWand::set_font`].
    Font {
        /// Font name.
        name: String,
    },
    /// [`DrawingWand::set_font_family`].
    FontFamily {
        /// Font family.
        family: String,
    },
    /// [`DrawingWand::set_font_size`].
    FontSize {
        /// Point size.
        size: f64,
    },
    /// [`DrawingWand::set_font_style`].
    FontStyle {
        /// Font style.
        style: FontStyle,
    },
    /// [`DrawingWand::set_font_weight`].
    FontWeight {
        /// Font weight.
        weight: u32,
    },
    /// [`DrawingWand::set_font_stretch`].
    FontStretch {
        /// Font stretch.
        stretch: FontStretch,
    },
    /// [`DrawingWand::set_text_antialias`].
    TextAntialias {
        /// On or off.
        enabled: bool,
    },
    /// [`DrawingWand::set_text_decoration`].
    TextDecoration {
        /// Text decoration.
        decoration: TextDecoration,
    },
    /// [`DrawingWand::set_text_under_color`].
    TextUnderColor {
        /// Color name.
        color: String,
    },
    /// [`DrawingWand::set_border_color`].
    BorderColor {
        /// Color name.
        color: String,
    },
    /// [`DrawingWand::set_text_encoding`].
    TextEncoding {
        /// Encoding name.
        encoding: String,
    },
    /// [`DrawingWand::set_gravity`].
    Gravity {
        /// Placement anchor.
        gravity: Gravity,
    },
    /// [`DrawingWand::set_text_alignment`].
    TextAlignment {
        /// Text alignment.
        alignment: TextAlignment,
    },
    /// [`DrawingWand::set_text_direction`].
    TextDirection {
        /// Text direction.
        direction: TextDirection,
    },
    /// [`DrawingWand::set_text_kerning`].
    TextKerning {
        /// Glyph spacing.
        kerning: f64,
    },
    /// [`DrawingWand::set_text_interline_spacing`].
    TextInterlineSpacing {
        /// Extra spacing.
        spacing: f64,
    },
    /// [`DrawingWand::set_text_interword_spacing`].
    TextInterwordSpacing {
        /// Extra spacing.
        spacing: f64,
    },

    // Transforms
    /// [`DrawingWand::affine`].
    Affine {
        /// Affine coefficients `[sx, rx, ry, sy, tx, ty]`.
        coeffs: [f64; 6],
    },
    /// [`DrawingWand::rotate`].
    Rotate {
        /// Angle in degrees.
        degrees: f64,
    },
    /// [`DrawingWand::scale`].
    Scale {
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
    },
    /// [`DrawingWand::skew_x`].
    SkewX {
        /// Angle in degrees.
        degrees: f64,
    },
    /// [`DrawingWand::skew_y`].
    SkewY {
        /// Angle in degrees.
        degrees: f64,
    },
    /// [`DrawingWand::translate`].
    Translate {
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
    },

    // Primitives
    /// [`DrawingWand::point`].
    Point {
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
    },
    /// [`DrawingWand::line`].
    Line {
        /// Start x.
        sx: f64,
        /// Start y.
        sy: f64,
        /// End x.
        ex: f64,
        /// End y.
        ey: f64,
    },
    /// [`DrawingWand::rectangle`].
    Rectangle {
        /// First corner x.
        x1: f64,
        /// First corner y.
        y1: f64,
        /// Second corner x.
        x2: f64,
        /// Second corner y.
        y2: f64,
    },
    /// [`DrawingWand::round_rectangle`].
    RoundRectangle {
        /// First corner x.
        x1: f64,
        /// First corner y.
        y1: f64,
        /// Second corner x.
        x2: f64,
        /// Second corner y.
        y2: f64,
        /// Radius along x.
        rx: f64,
        /// Radius along y.
        ry: f64,
    },
    /// [`DrawingWand::circle`].
    Circle {
        /// Center x.
        ox: f64,
        /// Center y.
        oy: f64,
        /// Perimeter point x.
        px: f64,
        /// Perimeter point y.
        py: f64,
    },
    /// [`DrawingWand::ellipse`].
    Ellipse {
        /// Center x.
        ox: f64,
        /// Center y.
        oy: f64,
        /// Radius along x.
        rx: f64,
        /// Radius along y.
        ry: f64,
        /// Start angle in degrees.
        start: f64,
        /// End angle in degrees.
        end: f64,
    },
    /// [`DrawingWand::arc`].
    Arc {
        /// Start x.
        sx: f64,
        /// Start y.
        sy: f64,
        /// End x.
        ex: f64,
        /// End y.
        ey: f64,
        /// Start angle in degrees.
        start: f64,
        /// End angle in degrees.
        end: f64,
    },
    /// [`DrawingWand::bezier`].
    Bezier {
        /// `[x, y]` pairs.
        points: Vec<(f64, f64)>,
    },
    /// [`DrawingWand::polygon`].
    Polygon {
        /// `[x, y]` pairs.
        points: Vec<(f64, f64)>,
    },
    /// [`DrawingWand::polyline`].
    Polyline {
        /// `[x, y]` pairs.
        points: Vec<(f64, f64)>,
    },
    /// [`DrawingWand::annotation`].
    Annotation {
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
        /// Text to write.
        text: String,
    },
    /// [`DrawingWand::color`].
    Color {
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
        /// Paint method.
        method: PaintMethod,
    },
    /// [`DrawingWand::matte`].
    Matte {
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
        /// Paint method.
        method: PaintMethod,
    },
    /// [`DrawingWand::set_viewbox`].
    Viewbox {
        /// First corner x.
        x1: i64,
        /// First corner y.
        y1: i64,
        /// Second corner x.
        x2: i64,
        /// Second corner y.
        y2: i64,
    },
    /// [`DrawingWand::composite`].
    Composite {
        /// Compositing operator.
        operator: CompositeOperator,
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
        /// Width.
        width: f64,
        /// Height.
        height: f64,
        /// Image file, relative to the script's base directory.
        source: String,
    },

    // Path data
    /// [`DrawingWand::path_start`].
    PathStart,
    /// [`DrawingWand::path_finish`].
    PathFinish,
    /// [`DrawingWand::path_close`].
    PathClose,
    /// [`DrawingWand::path_move_to`].
    PathMoveTo {
        /// Coordinate mode; absolute when omitted.
        #[serde(default = "absolute")]
        mode: PathMode,
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
    },
    /// [`DrawingWand::path_line_to`].
    PathLineTo {
        /// Coordinate mode; absolute when omitted.
        #[serde(default = "absolute")]
        mode: PathMode,
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
    },
    /// [`DrawingWand::path_line_to_horizontal`].
    PathLineToHorizontal {
        /// Coordinate mode; absolute when omitted.
        #[serde(default = "absolute")]
        mode: PathMode,
        /// X coordinate.
        x: f64,
    },
    /// [`DrawingWand::path_line_to_vertical`].
    PathLineToVertical {
        /// Coordinate mode; absolute when omitted.
        #[serde(default = "absolute")]
        mode: PathMode,
        /// Y coordinate.
        y: f64,
    },
    /// [`DrawingWand::path_curve_to`].
    PathCurveTo {
        /// Coordinate mode; absolute when omitted.
        #[serde(default = "absolute")]
        mode: PathMode,
        /// First corner x.
        x1: f64,
        /// First corner y.
        y1: f64,
        /// Second corner x.
        x2: f64,
        /// Second corner y.
        y2: f64,
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
    },
    /// [`DrawingWand::path_curve_to_quadratic_bezier`].
    PathCurveToQuadraticBezier {
        /// Coordinate mode; absolute when omitted.
        #[serde(default = "absolute")]
        mode: PathMode,
        /// First corner x.
        x1: f64,
        /// First corner y.
        y1: f64,
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
    },
    /// [`DrawingWand::path_curve_to_quadratic_bezier_smooth`].
    PathCurveToQuadraticBezierSmooth {
        /// Coordinate mode; absolute when omitted.
        #[serde(default = "absolute")]
        mode: PathMode,
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
    },
    /// [`DrawingWand::path_curve_to_smooth`].
    PathCurveToSmooth {
        /// Coordinate mode; absolute when omitted.
        #[serde(default = "absolute")]
        mode: PathMode,
        /// Second corner x.
        x2: f64,
        /// Second corner y.
        y2: f64,
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
    },
    /// [`DrawingWand::path_elliptic_arc`].
    PathEllipticArc {
        /// Coordinate mode; absolute when omitted.
        #[serde(default = "absolute")]
        mode: PathMode,
        /// Radius along x.
        rx: f64,
        /// Radius along y.
        ry: f64,
        /// X-axis rotation in degrees.
        #[serde(default)]
        rotation: f64,
        /// Take the larger arc.
        #[serde(default)]
        large_arc: bool,
        /// Sweep in the positive-angle direction.
        #[serde(default)]
        sweep: bool,
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
    },

    // Definitions
    /// [`DrawingWand::push_pattern`].
    PushPattern {
        /// Definition id.
        id: String,
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
        /// Width.
        width: f64,
        /// Height.
        height: f64,
    },
    /// [`DrawingWand::pop_pattern`].
    PopPattern,
    /// [`DrawingWand::push_clip_path`].
    PushClipPath {
        /// Definition id.
        id: String,
    },
    /// [`DrawingWand::pop_clip_path`].
    PopClipPath,
    /// [`DrawingWand::push_defs`].
    PushDefs,
    /// [`DrawingWand::pop_defs`].
    PopDefs,
}

/// A replay stopped at the command at `index`.
#[derive(thiserror::Error, Debug)]
#[error("command {index}: {source}")]
pub struct ReplayError {
    /// Position of the failing command.
    pub index: usize,
    /// The wand's error.
    #[source]
    pub source: WandError,
}

/// Parse a JSON script (an array of [`DrawCommand`]).
pub fn parse_script(reader: impl Read) -> WandResult<Vec<DrawCommand>> {
    serde_json::from_reader(reader)
        .map_err(|e| WandError::validation(format!("parse draw script JSON: {e}")))
}

/// Read a script file.
pub fn load_script(path: impl AsRef<Path>) -> WandResult<Vec<DrawCommand>> {
    let path = path.as_ref();
    let f = File::open(path).map_err(|e| {
        WandError::validation(format!("open draw script '{}': {e}", path.display()))
    })?;
    parse_script(BufReader::new(f))
}

/// Drive `wand` through `commands` in order, stopping at the first failure.
///
/// Composite sources are resolved against `base_dir`.
#[tracing::instrument(skip_all, fields(commands = commands.len()))]
pub fn replay(
    wand: &mut DrawingWand<'_>,
    commands: &[DrawCommand],
    base_dir: &Path,
) -> Result<(), ReplayError> {
    for (index, command) in commands.iter().enumerate() {
        if let Err(source) = command.apply(wand, base_dir) {
            tracing::debug!(index, ?command, error = %source, "replay stopped");
            return Err(ReplayError { index, source });
        }
    }
    Ok(())
}

fn points(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn load_source(base_dir: &Path, source: &str) -> WandResult<image::DynamicImage> {
    if source.trim().is_empty() {
        return Err(WandError::validation("composite source must be non-empty"));
    }
    let path = base_dir.join(source);
    let bytes =
        std::fs::read(&path).with_context(|| format!("read composite source '{}'", path.display()))?;
    let img = image::load_from_memory(&bytes)
        .with_context(|| format!("decode composite source '{}'", path.display()))?;
    Ok(img)
}

impl DrawCommand {
    /// Apply this command to `wand`.
    pub fn apply(&self, wand: &mut DrawingWand<'_>, base_dir: &Path) -> WandResult<()> {
        match self {
            Self::PushGraphicContext => wand.push_graphic_context(),
            Self::PopGraphicContext => wand.pop_graphic_context(),
            Self::Comment { text } => wand.comment(text),

            Self::FillColor { color } => wand.set_fill_color(color),
            Self::FillRgba { color } => wand.set_fill_rgba(*color),
            Self::FillPatternUrl { url } => wand.set_fill_pattern_url(url),
            Self::FillOpacity { opacity } => wand.set_fill_opacity(*opacity),
            Self::FillRule { rule } => wand.set_fill_rule(*rule),
            Self::Opacity { opacity } => wand.set_opacity(*opacity),
            Self::StrokeColor { color } => wand.set_stroke_color(color),
            Self::StrokeRgba { color } => wand.set_stroke_rgba(*color),
            Self::StrokePatternUrl { url } => wand.set_stroke_pattern_url(url),
            Self::StrokeOpacity { opacity } => wand.set_stroke_opacity(*opacity),
            Self::StrokeWidth { width } => wand.set_stroke_width(*width),
            Self::StrokeDashArray { dashes } => wand.set_stroke_dash_array(dashes),
            Self::StrokeDashOffset { offset } => wand.set_stroke_dash_offset(*offset),
            Self::StrokeLineCap { cap } => wand.set_stroke_line_cap(*cap),
            Self::StrokeLineJoin { join } => wand.set_stroke_line_join(*join),
            Self::StrokeMiterLimit { limit } => wand.set_stroke_miter_limit(*limit),
            Self::StrokeAntialias { enabled } => wand.set_stroke_antialias(*enabled),

            Self::ClipPath { id } => wand.set_clip_path(id),
            Self::ClipRule { rule } => wand.set_clip_rule(*rule),
            Self::ClipUnits { units } => wand.set_clip_units(*units),
            Self::ObjectBounds { x1, y1, x2, y2 } => {
                wand.set_object_bounds(Rect::new(*x1, *y1, *x2, *y2));
                Ok(())
            }

            Self::Font { name } => wand.set_font(name),
            Self::FontFamily { family } => wand.set_font_family(family),
            Self::FontSize { size } => wand.set_font_size(*size),
            Self::FontStyle { style } => wand.set_font_style(*style),
            Self::FontWeight { weight } => wand.set_font_weight(*weight),
            Self::FontStretch { stretch } => wand.set_font_stretch(*stretch),
            Self::TextAntialias { enabled } => wand.set_text_antialias(*enabled),
            Self::TextDecoration { decoration } => wand.set_text_decoration(*decoration),
            Self::TextUnderColor { color } => wand.set_text_under_color(color),
            Self::BorderColor { color } => wand.set_border_color(color),
            Self::TextEncoding { encoding } => wand.set_text_encoding(encoding),
            Self::Gravity { gravity } => wand.set_gravity(*gravity),
            Self::TextAlignment { alignment } => wand.set_text_alignment(*alignment),
            Self::TextDirection { direction } => wand.set_text_direction(*direction),
            Self::TextKerning { kerning } => wand.set_text_kerning(*kerning),
            Self::TextInterlineSpacing { spacing } => wand.set_text_interline_spacing(*spacing),
            Self::TextInterwordSpacing { spacing } => wand.set_text_interword_spacing(*spacing),

            Self::Affine { coeffs } => wand.affine(Affine::new(*coeffs)),
            Self::Rotate { degrees } => wand.rotate(*degrees),
            Self::Scale { x, y } => wand.scale(*x, *y),
            Self::SkewX { degrees } => wand.skew_x(*degrees),
            Self::SkewY { degrees } => wand.skew_y(*degrees),
            Self::Translate { x, y } => wand.translate(*x, *y),

            Self::Point { x, y } => wand.point(*x, *y),
            Self::Line { sx, sy, ex, ey } => wand.line(*sx, *sy, *ex, *ey),
            Self::Rectangle { x1, y1, x2, y2 } => wand.rectangle(*x1, *y1, *x2, *y2),
            Self::RoundRectangle {
                x1,
                y1,
                x2,
                y2,
                rx,
                ry,
            } => wand.round_rectangle(*x1, *y1, *x2, *y2, *rx, *ry),
            Self::Circle { ox, oy, px, py } => wand.circle(*ox, *oy, *px, *py),
            Self::Ellipse {
                ox,
                oy,
                rx,
                ry,
                start,
                end,
            } => wand.ellipse(*ox, *oy, *rx, *ry, *start, *end),
            Self::Arc {
                sx,
                sy,
                ex,
                ey,
                start,
                end,
            } => wand.arc(*sx, *sy, *ex, *ey, *start, *end),
            Self::Bezier { points: p } => wand.bezier(&points(p)),
            Self::Polygon { points: p } => wand.polygon(&points(p)),
            Self::Polyline { points: p } => wand.polyline(&points(p)),
            Self::Annotation { x, y, text } => wand.annotation(*x, *y, text),
            Self::Color { x, y, method } => wand.color(*x, *y, *method),
            Self::Matte { x, y, method } => wand.matte(*x, *y, *method),
            Self::Viewbox { x1, y1, x2, y2 } => wand.set_viewbox(*x1, *y1, *x2, *y2),
            Self::Composite {
                operator,
                x,
                y,
                width,
                height,
                source,
            } => {
                if *width == 0.0 || *height == 0.0 {
                    return Err(WandError::validation(
                        "composite width/height must be non-zero",
                    ));
                }
                let img = load_source(base_dir, source)?;
                wand.composite(*operator, *x, *y, *width, *height, &img)
            }

            Self::PathStart => wand.path_start(),
            Self::PathFinish => wand.path_finish(),
            Self::PathClose => wand.path_close(),
            Self::PathMoveTo { mode, x, y } => wand.path_move_to(*mode, *x, *y),
            Self::PathLineTo { mode, x, y } => wand.path_line_to(*mode, *x, *y),
            Self::PathLineToHorizontal { mode, x } => wand.path_line_to_horizontal(*mode, *x),
            Self::PathLineToVertical { mode, y } => wand.path_line_to_vertical(*mode, *y),
            Self::PathCurveTo {
                mode,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => wand.path_curve_to(*mode, *x1, *y1, *x2, *y2, *x, *y),
            Self::PathCurveToQuadraticBezier { mode, x1, y1, x, y } => {
                wand.path_curve_to_quadratic_bezier(*mode, *x1, *y1, *x, *y)
            }
            Self::PathCurveToQuadraticBezierSmooth { mode, x, y } => {
                wand.path_curve_to_quadratic_bezier_smooth(*mode, *x, *y)
            }
            Self::PathCurveToSmooth { mode, x2, y2, x, y } => {
                wand.path_curve_to_smooth(*mode, *x2, *y2, *x, *y)
            }
            Self::PathEllipticArc {
                mode,
                rx,
                ry,
                rotation,
                large_arc,
                sweep,
                x,
                y,
            } => wand.path_elliptic_arc(*mode, *rx, *ry, *rotation, *large_arc, *sweep, *x, *y),

            Self::PushPattern {
                id,
                x,
                y,
                width,
                height,
            } => wand.push_pattern(id, *x, *y, *width, *height),
            Self::PopPattern => wand.pop_pattern(),
            Self::PushClipPath { id } => wand.push_clip_path(id),
            Self::PopClipPath => wand.pop_clip_path(),
            Self::PushDefs => wand.push_defs(),
            Self::PopDefs => wand.pop_defs(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/command.rs"]
mod tests;
