//! Path-data operations inside a `path '...'` bracket.
//!
//! Each operation comes as a mode-taking method plus `_absolute`/`_relative` shorthands.
//! Consecutive calls with the same operation and mode share one command letter.

use std::fmt;

use crate::{
    foundation::{error::WandResult, number::G4},
    path::state::{PathMode, PathOperation},
    wand::drawing::DrawingWand,
};

struct Flag(bool);

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.0 { "1" } else { "0" })
    }
}

impl DrawingWand<'_> {
    /// Open a path bracket and reset the compaction state.
    pub fn path_start(&mut self) -> WandResult<()> {
        self.emit(format_args!("path '"))?;
        self.path.reset();
        Ok(())
    }

    /// Close the path bracket.
    pub fn path_finish(&mut self) -> WandResult<()> {
        self.emit(format_args!("'\n"))?;
        self.path.reset();
        Ok(())
    }

    /// `Z`/`z` following the mode of the previous operation (absolute if none yet).
    pub fn path_close(&mut self) -> WandResult<()> {
        let mode = match self.path.mode() {
            PathMode::Relative => PathMode::Relative,
            PathMode::Absolute | PathMode::None => PathMode::Absolute,
        };
        self.path_op(PathOperation::Close, mode, format_args!(""))
    }

    /// Start a subpath at `(x, y)`.
    pub fn path_move_to(&mut self, mode: PathMode, x: f64, y: f64) -> WandResult<()> {
        self.path_op(
            PathOperation::MoveTo,
            mode,
            format_args!("{},{}", G4(x), G4(y)),
        )
    }

    /// [`path_move_to`](Self::path_move_to) in absolute coordinates.
    pub fn path_move_to_absolute(&mut self, x: f64, y: f64) -> WandResult<()> {
        self.path_move_to(PathMode::Absolute, x, y)
    }

    /// [`path_move_to`](Self::path_move_to) in relative coordinates.
    pub fn path_move_to_relative(&mut self, x: f64, y: f64) -> WandResult<()> {
        self.path_move_to(PathMode::Relative, x, y)
    }

    /// Line to `(x, y)`.
    pub fn path_line_to(&mut self, mode: PathMode, x: f64, y: f64) -> WandResult<()> {
        self.path_op(
            PathOperation::LineTo,
            mode,
            format_args!("{},{}", G4(x), G4(y)),
        )
    }

    /// [`path_line_to`](Self::path_line_to) in absolute coordinates.
    pub fn path_line_to_absolute(&mut self, x: f64, y: f64) -> WandResult<()> {
        self.path_line_to(PathMode::Absolute, x, y)
    }

    /// [`path_line_to`](Self::path_line_to) in relative coordinates.
    pub fn path_line_to_relative(&mut self, x: f64, y: f64) -> WandResult<()> {
        self.path_line_to(PathMode::Relative, x, y)
    }

    /// Horizontal line to `x`.
    pub fn path_line_to_horizontal(&mut self, mode: PathMode, x: f64) -> WandResult<()> {
        self.path_op(
            PathOperation::LineHorizontal,
            mode,
            format_args!("{}", G4(x)),
        )
    }

    /// [`path_line_to_horizontal`](Self::path_line_to_horizontal) in absolute coordinates.
    pub fn path_line_to_horizontal_absolute(&mut self, x: f64) -> WandResult<()> {
        self.path_line_to_horizontal(PathMode::Absolute, x)
    }

    /// [`path_line_to_horizontal`](Self::path_line_to_horizontal) in relative coordinates.
    pub fn path_line_to_horizontal_relative(&mut self, x: f64) -> WandResult<()> {
        self.path_line_to_horizontal(PathMode::Relative, x)
    }

    /// Vertical line to `y`.
    pub fn path_line_to_vertical(&mut self, mode: PathMode, y: f64) -> WandResult<()> {
        self.path_op(
            PathOperation::LineVertical,
            mode,
            format_args!("{}", G4(y)),
        )
    }

    /// [`path_line_to_vertical`](Self::path_line_to_vertical) in absolute coordinates.
    pub fn path_line_to_vertical_absolute(&mut self, y: f64) -> WandResult<()> {
        self.path_line_to_vertical(PathMode::Absolute, y)
    }

    /// [`path_line_to_vertical`](Self::path_line_to_vertical) in relative coordinates.
    pub fn path_line_to_vertical_relative(&mut self, y: f64) -> WandResult<()> {
        self.path_line_to_vertical(PathMode::Relative, y)
    }

    /// Cubic Bezier with control points `(x1, y1)`, `(x2, y2)` ending at `(x, y)`.
    pub fn path_curve_to(
        &mut self,
        mode: PathMode,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    ) -> WandResult<()> {
        self.path_op(
            PathOperation::CurveTo,
            mode,
            format_args!(
                "{},{} {},{} {},{}",
                G4(x1),
                G4(y1),
                G4(x2),
                G4(y2),
                G4(x),
                G4(y)
            ),
        )
    }

    /// [`path_curve_to`](Self::path_curve_to) in absolute coordinates.
    pub fn path_curve_to_absolute(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    ) -> WandResult<()> {
        self.path_curve_to(PathMode::Absolute, x1, y1, x2, y2, x, y)
    }

    /// [`path_curve_to`](Self::path_curve_to) in relative coordinates.
    pub fn path_curve_to_relative(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    ) -> WandResult<()> {
        self.path_curve_to(PathMode::Relative, x1, y1, x2, y2, x, y)
    }

    /// Quadratic Bezier with control point `(x1, y1)` ending at `(x, y)`.
    pub fn path_curve_to_quadratic_bezier(
        &mut self,
        mode: PathMode,
        x1: f64,
        y1: f64,
        x: f64,
        y: f64,
    ) -> WandResult<()> {
        self.path_op(
            PathOperation::QuadraticBezier,
            mode,
            format_args!("{},{} {},{}", G4(x1), G4(y1), G4(x), G4(y)),
        )
    }

    /// [`path_curve_to_quadratic_bezier`](Self::path_curve_to_quadratic_bezier) in absolute coordinates.
    pub fn path_curve_to_quadratic_bezier_absolute(
        &mut self,
        x1: f64,
        y1: f64,
        x: f64,
        y: f64,
    ) -> WandResult<()> {
        self.path_curve_to_quadratic_bezier(PathMode::Absolute, x1, y1, x, y)
    }

    /// [`path_curve_to_quadratic_bezier`](Self::path_curve_to_quadratic_bezier) in relative coordinates.
    pub fn path_curve_to_quadratic_bezier_relative(
        &mut self,
        x1: f64,
        y1: f64,
        x: f64,
        y: f64,
    ) -> WandResult<()> {
        self.path_curve_to_quadratic_bezier(PathMode::Relative, x1, y1, x, y)
    }

    /// Quadratic Bezier whose control point mirrors the previous one.
    pub fn path_curve_to_quadratic_bezier_smooth(
        &mut self,
        mode: PathMode,
        x: f64,
        y: f64,
    ) -> WandResult<()> {
        self.path_op(
            PathOperation::QuadraticBezierSmooth,
            mode,
            format_args!("{},{}", G4(x), G4(y)),
        )
    }

    /// [`path_curve_to_quadratic_bezier_smooth`](Self::path_curve_to_quadratic_bezier_smooth) in absolute coordinates.
    pub fn path_curve_to_quadratic_bezier_smooth_absolute(
        &mut self,
        x: f64,
        y: f64,
    ) -> WandResult<()> {
        self.path_curve_to_quadratic_bezier_smooth(PathMode::Absolute, x, y)
    }

    /// [`path_curve_to_quadratic_bezier_smooth`](Self::path_curve_to_quadratic_bezier_smooth) in relative coordinates.
    pub fn path_curve_to_quadratic_bezier_smooth_relative(
        &mut self,
        x: f64,
        y: f64,
    ) -> WandResult<()> {
        self.path_curve_to_quadratic_bezier_smooth(PathMode::Relative, x, y)
    }

    /// Cubic Bezier whose first control point mirrors the previous second one.
    pub fn path_curve_to_smooth(
        &mut self,
        mode: PathMode,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    ) -> WandResult<()> {
        self.path_op(
            PathOperation::SmoothCurve,
            mode,
            format_args!("{},{} {},{}", G4(x2), G4(y2), G4(x), G4(y)),
        )
    }

    /// [`path_curve_to_smooth`](Self::path_curve_to_smooth) in absolute coordinates.
    pub fn path_curve_to_smooth_absolute(
        &mut self,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    ) -> WandResult<()> {
        self.path_curve_to_smooth(PathMode::Absolute, x2, y2, x, y)
    }

    /// [`path_curve_to_smooth`](Self::path_curve_to_smooth) in relative coordinates.
    pub fn path_curve_to_smooth_relative(
        &mut self,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    ) -> WandResult<()> {
        self.path_curve_to_smooth(PathMode::Relative, x2, y2, x, y)
    }

    /// Elliptical arc to `(x, y)` with radii `rx`, `ry`; flags are written as `0`/`1`.
    pub fn path_elliptic_arc(
        &mut self,
        mode: PathMode,
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> WandResult<()> {
        self.path_op(
            PathOperation::EllipticArc,
            mode,
            format_args!(
                "{},{} {} {} {} {},{}",
                G4(rx),
                G4(ry),
                G4(x_axis_rotation),
                Flag(large_arc),
                Flag(sweep),
                G4(x),
                G4(y)
            ),
        )
    }

    /// [`path_elliptic_arc`](Self::path_elliptic_arc) in absolute coordinates.
    pub fn path_elliptic_arc_absolute(
        &mut self,
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> WandResult<()> {
        self.path_elliptic_arc(
            PathMode::Absolute,
            rx,
            ry,
            x_axis_rotation,
            large_arc,
            sweep,
            x,
            y,
        )
    }

    /// [`path_elliptic_arc`](Self::path_elliptic_arc) in relative coordinates.
    pub fn path_elliptic_arc_relative(
        &mut self,
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> WandResult<()> {
        self.path_elliptic_arc(
            PathMode::Relative,
            rx,
            ry,
            x_axis_rotation,
            large_arc,
            sweep,
            x,
            y,
        )
    }

    /// Write `coords` behind the command letter the compaction state asks for. The state
    /// only advances once the write succeeded.
    fn path_op(
        &mut self,
        operation: PathOperation,
        mode: PathMode,
        coords: fmt::Arguments<'_>,
    ) -> WandResult<()> {
        // An unset mode is written as uppercase, so it is recorded as absolute too.
        let mode = match mode {
            PathMode::None => PathMode::Absolute,
            mode => mode,
        };
        let token = self.path.preview(operation, mode);
        self.emit_wrapped(format_args!("{token}{coords}"))?;
        self.path.advance(operation, mode);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wand/path.rs"]
mod tests;
