use std::fmt;

use crate::{
    foundation::{
        core::Affine,
        error::WandResult,
        number::{G4, G6},
    },
    transform::affine,
    wand::drawing::DrawingWand,
};

impl DrawingWand<'_> {
    /// Concatenate an explicit matrix, emitted with six-digit coefficients.
    pub fn affine(&mut self, m: Affine) -> WandResult<()> {
        let [sx, rx, ry, sy, tx, ty] = m.as_coeffs();
        self.apply_transform(
            m,
            format_args!(
                "affine {} {} {} {} {} {}\n",
                G6(sx),
                G6(rx),
                G6(ry),
                G6(sy),
                G6(tx),
                G6(ty)
            ),
        )
    }

    /// Rotate by `degrees`.
    pub fn rotate(&mut self, degrees: f64) -> WandResult<()> {
        self.apply_transform(
            affine::rotate(degrees),
            format_args!("rotate {}\n", G4(degrees)),
        )
    }

    /// Scale by `sx`, `sy`.
    pub fn scale(&mut self, sx: f64, sy: f64) -> WandResult<()> {
        self.apply_transform(
            affine::scale(sx, sy),
            format_args!("scale {},{}\n", G4(sx), G4(sy)),
        )
    }

    /// Skew along x by `degrees`.
    pub fn skew_x(&mut self, degrees: f64) -> WandResult<()> {
        self.apply_transform(
            affine::skew_x(degrees),
            format_args!("skewX {}\n", G4(degrees)),
        )
    }

    /// Skew along y by `degrees`.
    pub fn skew_y(&mut self, degrees: f64) -> WandResult<()> {
        self.apply_transform(
            affine::skew_y(degrees),
            format_args!("skewY {}\n", G4(degrees)),
        )
    }

    /// Translate by `(x, y)`.
    pub fn translate(&mut self, x: f64, y: f64) -> WandResult<()> {
        self.apply_transform(
            affine::translate(x, y),
            format_args!("translate {},{}\n", G4(x), G4(y)),
        )
    }

    /// Emit the caller's own parameters and fold `delta` into the cumulative transform.
    /// Identity deltas are dropped entirely: an `affine` line is a save-point downstream.
    fn apply_transform(&mut self, delta: Affine, instruction: fmt::Arguments<'_>) -> WandResult<()> {
        if affine::is_identity(delta) {
            return Ok(());
        }
        self.emit(instruction)?;
        self.compose_affine(delta);
        Ok(())
    }

    pub(super) fn compose_affine(&mut self, delta: Affine) {
        let ctx = self.current_mut();
        ctx.affine = affine::compose(ctx.affine, delta);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wand/transform.rs"]
mod tests;
