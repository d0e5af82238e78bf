use std::fmt;

use crate::{
    context::graphic::{
        ClipUnits, FillRule, FontStretch, FontStyle, GraphicContext, Gravity, LineCap, LineJoin,
        TextAlignment, TextDecoration, TextDirection,
    },
    foundation::{
        core::{Rect, Rgba8, opacity_to_alpha},
        error::{WandError, WandResult},
        number::G4,
    },
    transform::affine,
    wand::{definitions::pattern_key, drawing::DrawingWand, primitives::Escaped},
};

/// Tolerance for point sizes, widths, offsets and spacings.
pub const EPSILON: f64 = 1.0e-12;

fn differs(a: f64, b: f64) -> bool {
    (a - b).abs() >= EPSILON
}

struct DashList<'a>(&'a [f64]);

impl fmt::Display for DashList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("none");
        }
        for (i, v) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", G4(*v))?;
        }
        Ok(())
    }
}

struct Flag(bool);

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.0 { "1" } else { "0" })
    }
}

impl DrawingWand<'_> {
    // ---- paint ---------------------------------------------------------

    /// Resolve `name` and set it as the fill color.
    pub fn set_fill_color(&mut self, name: &str) -> WandResult<()> {
        let color = self.resolve_color(name)?;
        self.set_fill_rgba(color)
    }

    /// Set the fill color. Unless `color` is fully transparent, its alpha is replaced by the
    /// context's general opacity.
    pub fn set_fill_rgba(&mut self, color: Rgba8) -> WandResult<()> {
        let color = self.couple_opacity(color);
        let ctx = self.context();
        if self.should_emit(ctx.fill != color || ctx.fill_pattern.is_some()) {
            self.emit(format_args!("fill '{color}'\n"))?;
            let ctx = self.current_mut();
            ctx.fill = color;
            ctx.fill_pattern = None;
        }
        Ok(())
    }

    /// Fill with a published pattern, referenced as `#id`.
    pub fn set_fill_pattern_url(&mut self, url: &str) -> WandResult<()> {
        let id = self.pattern_reference(url)?;
        if self.should_emit(self.context().fill_pattern.as_deref() != Some(id.as_str())) {
            self.emit(format_args!("fill url(#{id})\n"))?;
            let alpha = self.context().alpha;
            let ctx = self.current_mut();
            if !ctx.fill.is_transparent() {
                ctx.fill.a = alpha;
            }
            ctx.fill_pattern = Some(id);
        }
        Ok(())
    }

    /// Fill opacity in `[0, 1]`, stored in the fill's alpha.
    pub fn set_fill_opacity(&mut self, opacity: f64) -> WandResult<()> {
        let alpha = opacity_to_alpha(opacity);
        self.update(
            |c| &mut c.fill.a,
            alpha,
            format_args!("fill-opacity {}\n", G4(opacity)),
        )
    }

    /// Winding rule for fills.
    pub fn set_fill_rule(&mut self, rule: FillRule) -> WandResult<()> {
        self.update(
            |c| &mut c.fill_rule,
            rule,
            format_args!("fill-rule {}\n", rule.as_str()),
        )
    }

    /// General paint opacity; later fill/stroke colors adopt it.
    pub fn set_opacity(&mut self, opacity: f64) -> WandResult<()> {
        let alpha = opacity_to_alpha(opacity);
        self.update(
            |c| &mut c.alpha,
            alpha,
            format_args!("opacity {}\n", G4(opacity)),
        )
    }

    /// Resolve `name` and set it as the stroke color.
    pub fn set_stroke_color(&mut self, name: &str) -> WandResult<()> {
        let color = self.resolve_color(name)?;
        self.set_stroke_rgba(color)
    }

    /// Stroke counterpart of [`set_fill_rgba`](Self::set_fill_rgba).
    pub fn set_stroke_rgba(&mut self, color: Rgba8) -> WandResult<()> {
        let color = self.couple_opacity(color);
        let ctx = self.context();
        if self.should_emit(ctx.stroke != color || ctx.stroke_pattern.is_some()) {
            self.emit(format_args!("stroke '{color}'\n"))?;
            let ctx = self.current_mut();
            ctx.stroke = color;
            ctx.stroke_pattern = None;
        }
        Ok(())
    }

    /// Stroke with a published pattern, referenced as `#id`.
    pub fn set_stroke_pattern_url(&mut self, url: &str) -> WandResult<()> {
        let id = self.pattern_reference(url)?;
        if self.should_emit(self.context().stroke_pattern.as_deref() != Some(id.as_str())) {
            self.emit(format_args!("stroke url(#{id})\n"))?;
            let alpha = self.context().alpha;
            let ctx = self.current_mut();
            if !ctx.stroke.is_transparent() {
                ctx.stroke.a = alpha;
            }
            ctx.stroke_pattern = Some(id);
        }
        Ok(())
    }

    /// Stroke opacity in `[0, 1]`, stored in the stroke's alpha.
    pub fn set_stroke_opacity(&mut self, opacity: f64) -> WandResult<()> {
        let alpha = opacity_to_alpha(opacity);
        self.update(
            |c| &mut c.stroke.a,
            alpha,
            format_args!("stroke-opacity {}\n", G4(opacity)),
        )
    }

    /// Stroke width in user units.
    pub fn set_stroke_width(&mut self, width: f64) -> WandResult<()> {
        self.update_f64(
            |c| &mut c.stroke_width,
            width,
            format_args!("stroke-width {}\n", G4(width)),
        )
    }

    /// An empty slice clears the dash pattern (`stroke-dasharray none`).
    pub fn set_stroke_dash_array(&mut self, dashes: &[f64]) -> WandResult<()> {
        let current = &self.context().dash_array;
        let changed = current.len() != dashes.len()
            || current.iter().zip(dashes).any(|(a, b)| differs(*a, *b));
        if self.should_emit(changed) {
            self.emit(format_args!("stroke-dasharray {}\n", DashList(dashes)))?;
            self.current_mut().dash_array = dashes.to_vec();
        }
        Ok(())
    }

    /// Offset into the dash pattern.
    pub fn set_stroke_dash_offset(&mut self, offset: f64) -> WandResult<()> {
        self.update_f64(
            |c| &mut c.dash_offset,
            offset,
            format_args!("stroke-dashoffset {}\n", G4(offset)),
        )
    }

    /// Shape of open stroke ends.
    pub fn set_stroke_line_cap(&mut self, cap: LineCap) -> WandResult<()> {
        self.update(
            |c| &mut c.line_cap,
            cap,
            format_args!("stroke-linecap {}\n", cap.as_str()),
        )
    }

    /// Shape of stroke corners.
    pub fn set_stroke_line_join(&mut self, join: LineJoin) -> WandResult<()> {
        self.update(
            |c| &mut c.line_join,
            join,
            format_args!("stroke-linejoin {}\n", join.as_str()),
        )
    }

    /// Miter length limit.
    pub fn set_stroke_miter_limit(&mut self, limit: u32) -> WandResult<()> {
        self.update(
            |c| &mut c.miter_limit,
            limit,
            format_args!("stroke-miterlimit {limit}\n"),
        )
    }

    /// Toggle stroke antialiasing.
    pub fn set_stroke_antialias(&mut self, enabled: bool) -> WandResult<()> {
        self.update(
            |c| &mut c.stroke_antialias,
            enabled,
            format_args!("stroke-antialias {}\n", Flag(enabled)),
        )
    }

    // ---- clipping ------------------------------------------------------

    /// Clip to a clip path completed earlier with `push_clip_path`/`pop_clip_path`.
    pub fn set_clip_path(&mut self, id: &str) -> WandResult<()> {
        let id = self.require("clip_path", id)?;
        if !self.clip_paths.contains(id) {
            return Err(self.fail(WandError::undefined_reference(id)));
        }
        if self.should_emit(self.context().clip_path.as_deref() != Some(id)) {
            self.emit(format_args!("clip-path url(#{id})\n"))?;
            self.current_mut().clip_path = Some(id.to_owned());
        }
        Ok(())
    }

    /// Winding rule for the clip path.
    pub fn set_clip_rule(&mut self, rule: FillRule) -> WandResult<()> {
        self.update(
            |c| &mut c.clip_rule,
            rule,
            format_args!("clip-rule {}\n", rule.as_str()),
        )
    }

    /// Switching to object-bounding-box units also folds the bounding-box map of the
    /// context's [`bounds`](GraphicContext::bounds) into the cumulative transform, when known.
    pub fn set_clip_units(&mut self, units: ClipUnits) -> WandResult<()> {
        if self.should_emit(self.context().clip_units != units) {
            self.emit(format_args!("clip-units {}\n", units.as_str()))?;
            self.current_mut().clip_units = units;
            let bounds = self.context().bounds;
            if units == ClipUnits::ObjectBoundingBox && bounds.area() > 0.0 {
                self.compose_affine(affine::bounding_box(bounds));
            }
        }
        Ok(())
    }

    /// Record the object bounding box used by object-relative clip units. Emits nothing.
    pub fn set_object_bounds(&mut self, bounds: Rect) {
        self.current_mut().bounds = bounds;
    }

    // ---- text ----------------------------------------------------------

    /// Font by name or file.
    pub fn set_font(&mut self, name: &str) -> WandResult<()> {
        let name = self.require("font", name)?;
        self.update(
            |c| &mut c.font,
            Some(name.to_owned()),
            format_args!("font '{}'\n", Escaped(name)),
        )
    }

    /// Font family.
    pub fn set_font_family(&mut self, family: &str) -> WandResult<()> {
        let family = self.require("font_family", family)?;
        self.update(
            |c| &mut c.font_family,
            Some(family.to_owned()),
            format_args!("font-family '{}'\n", Escaped(family)),
        )
    }

    /// Font size in points.
    pub fn set_font_size(&mut self, point_size: f64) -> WandResult<()> {
        self.update_f64(
            |c| &mut c.point_size,
            point_size,
            format_args!("font-size {}\n", G4(point_size)),
        )
    }

    /// Font slant.
    pub fn set_font_style(&mut self, style: FontStyle) -> WandResult<()> {
        self.update(
            |c| &mut c.font_style,
            style,
            format_args!("font-style {}\n", style.as_str()),
        )
    }

    /// Font weight, 100 to 900.
    pub fn set_font_weight(&mut self, weight: u32) -> WandResult<()> {
        self.update(
            |c| &mut c.font_weight,
            weight,
            format_args!("font-weight {weight}\n"),
        )
    }

    /// Font width.
    pub fn set_font_stretch(&mut self, stretch: FontStretch) -> WandResult<()> {
        self.update(
            |c| &mut c.font_stretch,
            stretch,
            format_args!("font-stretch {}\n", stretch.as_str()),
        )
    }

    /// Toggle text antialiasing.
    pub fn set_text_antialias(&mut self, enabled: bool) -> WandResult<()> {
        self.update(
            |c| &mut c.text_antialias,
            enabled,
            format_args!("text-antialias {}\n", Flag(enabled)),
        )
    }

    /// Underline, overline or strike-through.
    pub fn set_text_decoration(&mut self, decoration: TextDecoration) -> WandResult<()> {
        self.update(
            |c| &mut c.decoration,
            decoration,
            format_args!("decorate {}\n", decoration.as_str()),
        )
    }

    /// Resolve `name` and set it as the box color behind text.
    pub fn set_text_under_color(&mut self, name: &str) -> WandResult<()> {
        let color = self.resolve_color(name)?;
        self.set_text_under_rgba(color)
    }

    /// Box color behind text.
    pub fn set_text_under_rgba(&mut self, color: Rgba8) -> WandResult<()> {
        self.update(
            |c| &mut c.undercolor,
            color,
            format_args!("text-undercolor '{color}'\n"),
        )
    }

    /// Resolve `name` and set it as the border color.
    pub fn set_border_color(&mut self, name: &str) -> WandResult<()> {
        let color = self.resolve_color(name)?;
        self.set_border_rgba(color)
    }

    /// Border color.
    pub fn set_border_rgba(&mut self, color: Rgba8) -> WandResult<()> {
        self.update(
            |c| &mut c.border_color,
            color,
            format_args!("border-color '{color}'\n"),
        )
    }

    /// Text encoding name.
    pub fn set_text_encoding(&mut self, encoding: &str) -> WandResult<()> {
        let encoding = self.require("encoding", encoding)?;
        self.update(
            |c| &mut c.encoding,
            Some(encoding.to_owned()),
            format_args!("encoding '{}'\n", Escaped(encoding)),
        )
    }

    /// `Undefined` and `Static` update the context without emitting anything.
    pub fn set_gravity(&mut self, gravity: Gravity) -> WandResult<()> {
        self.update_optional(|c| &mut c.gravity, gravity, "gravity", gravity.as_mvg())
    }

    /// Horizontal alignment; `Undefined` updates the context but emits nothing.
    pub fn set_text_alignment(&mut self, alignment: TextAlignment) -> WandResult<()> {
        self.update_optional(
            |c| &mut c.text_alignment,
            alignment,
            "text-align",
            alignment.as_mvg(),
        )
    }

    /// Run direction; `Undefined` updates the context but emits nothing.
    pub fn set_text_direction(&mut self, direction: TextDirection) -> WandResult<()> {
        self.update_optional(
            |c| &mut c.direction,
            direction,
            "direction",
            direction.as_mvg(),
        )
    }

    /// Extra space between glyphs.
    pub fn set_text_kerning(&mut self, kerning: f64) -> WandResult<()> {
        self.update_f64(
            |c| &mut c.kerning,
            kerning,
            format_args!("kerning {}\n", G4(kerning)),
        )
    }

    /// Extra space between lines.
    pub fn set_text_interline_spacing(&mut self, spacing: f64) -> WandResult<()> {
        self.update_f64(
            |c| &mut c.interline_spacing,
            spacing,
            format_args!("interline-spacing {}\n", G4(spacing)),
        )
    }

    /// Extra space between words.
    pub fn set_text_interword_spacing(&mut self, spacing: f64) -> WandResult<()> {
        self.update_f64(
            |c| &mut c.interword_spacing,
            spacing,
            format_args!("interword-spacing {}\n", G4(spacing)),
        )
    }

    // ---- helpers -------------------------------------------------------

    /// Emit `instruction` and store `value`, unless filtering finds the value unchanged.
    /// Nothing is stored when the write fails.
    fn update<T: PartialEq>(
        &mut self,
        field: fn(&mut GraphicContext) -> &mut T,
        value: T,
        instruction: fmt::Arguments<'_>,
    ) -> WandResult<()> {
        let changed = *field(self.current_mut()) != value;
        if self.should_emit(changed) {
            self.emit(instruction)?;
            *field(self.current_mut()) = value;
        }
        Ok(())
    }

    fn update_f64(
        &mut self,
        field: fn(&mut GraphicContext) -> &mut f64,
        value: f64,
        instruction: fmt::Arguments<'_>,
    ) -> WandResult<()> {
        let changed = differs(*field(self.current_mut()), value);
        if self.should_emit(changed) {
            self.emit(instruction)?;
            *field(self.current_mut()) = value;
        }
        Ok(())
    }

    fn update_optional<T: PartialEq>(
        &mut self,
        field: fn(&mut GraphicContext) -> &mut T,
        value: T,
        keyword: &str,
        token: Option<&str>,
    ) -> WandResult<()> {
        let changed = *field(self.current_mut()) != value;
        if self.should_emit(changed) {
            if let Some(token) = token {
                self.emit(format_args!("{keyword} {token}\n"))?;
            }
            *field(self.current_mut()) = value;
        }
        Ok(())
    }

    fn couple_opacity(&self, color: Rgba8) -> Rgba8 {
        if color.is_transparent() {
            color
        } else {
            color.with_alpha(self.context().alpha)
        }
    }

    pub(super) fn resolve_color(&mut self, name: &str) -> WandResult<Rgba8> {
        let name = self.require("color", name)?;
        match self.colors.resolve(name) {
            Some(color) => Ok(color),
            None => Err(self.fail(WandError::unknown_color(name))),
        }
    }

    pub(super) fn require<'a>(
        &mut self,
        what: &'static str,
        value: &'a str,
    ) -> WandResult<&'a str> {
        if value.trim().is_empty() {
            return Err(self.fail(WandError::MissingArgument(what)));
        }
        Ok(value)
    }

    fn pattern_reference(&mut self, url: &str) -> WandResult<String> {
        let url = self.require("url", url)?;
        let Some(id) = url.strip_prefix('#') else {
            return Err(self.fail(WandError::NotARelativeUrl(url.to_owned())));
        };
        if self.image.artifact(&pattern_key(id)).is_none() {
            return Err(self.fail(WandError::undefined_reference(id)));
        }
        Ok(id.to_owned())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wand/attributes.rs"]
mod tests;
