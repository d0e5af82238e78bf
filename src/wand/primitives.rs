use std::fmt::{self, Write as _};

use crate::{
    foundation::{core::Point, error::WandResult, number::G4},
    wand::drawing::DrawingWand,
};

/// Single-quote-safe rendering: `'` and `\` are backslash-escaped.
pub(crate) struct Escaped<'a>(pub(crate) &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.0.chars() {
            if ch == '\'' || ch == '\\' {
                f.write_char('\\')?;
            }
            f.write_char(ch)?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// How `color`/`matte` pick the pixels they repaint.
pub enum PaintMethod {
    /// The pixel at the target point.
    Point,
    /// Every pixel matching the target's color.
    Replace,
    /// Connected pixels matching the target's color.
    FloodFill,
    /// Connected pixels up to the border color.
    FillToBorder,
    /// Every pixel.
    Reset,
}

impl PaintMethod {
    /// Instruction keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Replace => "replace",
            Self::FloodFill => "floodfill",
            Self::FillToBorder => "filltoborder",
            Self::Reset => "reset",
        }
    }
}

impl DrawingWand<'_> {
    /// Single point.
    pub fn point(&mut self, x: f64, y: f64) -> WandResult<()> {
        self.emit(format_args!("point {},{}\n", G4(x), G4(y)))
    }

    /// Line segment.
    pub fn line(&mut self, sx: f64, sy: f64, ex: f64, ey: f64) -> WandResult<()> {
        self.emit(format_args!(
            "line {},{} {},{}\n",
            G4(sx),
            G4(sy),
            G4(ex),
            G4(ey)
        ))
    }

    /// Rectangle by opposite corners.
    pub fn rectangle(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> WandResult<()> {
        self.emit(format_args!(
            "rectangle {},{} {},{}\n",
            G4(x1),
            G4(y1),
            G4(x2),
            G4(y2)
        ))
    }

    /// Rectangle with corner radii `rx`, `ry`.
    pub fn round_rectangle(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        rx: f64,
        ry: f64,
    ) -> WandResult<()> {
        self.emit(format_args!(
            "roundrectangle {},{} {},{} {},{}\n",
            G4(x1),
            G4(y1),
            G4(x2),
            G4(y2),
            G4(rx),
            G4(ry)
        ))
    }

    /// Circle through `(px, py)` centered on `(ox, oy)`.
    pub fn circle(&mut self, ox: f64, oy: f64, px: f64, py: f64) -> WandResult<()> {
        self.emit(format_args!(
            "circle {},{} {},{}\n",
            G4(ox),
            G4(oy),
            G4(px),
            G4(py)
        ))
    }

    /// Ellipse arc from `start` to `end` degrees.
    pub fn ellipse(
        &mut self,
        ox: f64,
        oy: f64,
        rx: f64,
        ry: f64,
        start: f64,
        end: f64,
    ) -> WandResult<()> {
        self.emit(format_args!(
            "ellipse {},{} {},{} {},{}\n",
            G4(ox),
            G4(oy),
            G4(rx),
            G4(ry),
            G4(start),
            G4(end)
        ))
    }

    /// Arc inscribed in a bounding box, from `start` to `end` degrees.
    pub fn arc(
        &mut self,
        sx: f64,
        sy: f64,
        ex: f64,
        ey: f64,
        start: f64,
        end: f64,
    ) -> WandResult<()> {
        self.emit(format_args!(
            "arc {},{} {},{} {},{}\n",
            G4(sx),
            G4(sy),
            G4(ex),
            G4(ey),
            G4(start),
            G4(end)
        ))
    }

    /// Bezier through `points`.
    pub fn bezier(&mut self, points: &[Point]) -> WandResult<()> {
        self.point_list("bezier", points)
    }

    /// Closed polygon.
    pub fn polygon(&mut self, points: &[Point]) -> WandResult<()> {
        self.point_list("polygon", points)
    }

    /// Open polyline.
    pub fn polyline(&mut self, points: &[Point]) -> WandResult<()> {
        self.point_list("polyline", points)
    }

    /// Draw `text` at `(x, y)`.
    pub fn annotation(&mut self, x: f64, y: f64, text: &str) -> WandResult<()> {
        self.emit(format_args!(
            "text {},{} '{}'\n",
            G4(x),
            G4(y),
            Escaped(text)
        ))
    }

    /// Repaint pixels with the fill color.
    pub fn color(&mut self, x: f64, y: f64, method: PaintMethod) -> WandResult<()> {
        self.emit(format_args!(
            "color {},{} {}\n",
            G4(x),
            G4(y),
            method.as_str()
        ))
    }

    /// Repaint the alpha channel.
    pub fn matte(&mut self, x: f64, y: f64, method: PaintMethod) -> WandResult<()> {
        self.emit(format_args!(
            "matte {},{} {}\n",
            G4(x),
            G4(y),
            method.as_str()
        ))
    }

    /// Viewbox in integer user units.
    pub fn set_viewbox(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) -> WandResult<()> {
        self.emit(format_args!("viewbox {x1} {y1} {x2} {y2}\n"))
    }

    fn point_list(&mut self, keyword: &str, points: &[Point]) -> WandResult<()> {
        self.emit_atomic(|w| {
            w.emit(format_args!("{keyword}"))?;
            for p in points {
                w.emit_wrapped(format_args!(" {},{}", G4(p.x), G4(p.y)))?;
            }
            w.emit(format_args!("\n"))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wand/primitives.rs"]
mod tests;
