//! Affine transform helpers.
//!
//! Coefficients follow the MVG `affine sx rx ry sy tx ty` order, which is also
//! [`Affine::as_coeffs`] order: `(x, y) -> (sx*x + ry*y + tx, rx*x + sy*y + ty)`.

use crate::foundation::core::Affine;

/// The identity map.
#[inline]
pub fn identity() -> Affine {
    Affine::IDENTITY
}

/// `true` when every coefficient matches the identity exactly.
#[inline]
pub fn is_identity(a: Affine) -> bool {
    a.as_coeffs() == Affine::IDENTITY.as_coeffs()
}

/// `current * delta`: `delta` is applied first, in the coordinate system of `current`.
#[inline]
pub fn compose(current: Affine, delta: Affine) -> Affine {
    if is_identity(delta) {
        return current;
    }
    current * delta
}

/// Build from raw `(sx, rx, ry, sy, tx, ty)` coefficients.
#[inline]
pub fn from_coeffs(sx: f64, rx: f64, ry: f64, sy: f64, tx: f64, ty: f64) -> Affine {
    Affine::new([sx, rx, ry, sy, tx, ty])
}

/// Rotation by `degrees` (taken modulo 360): `sx=cos, rx=sin, ry=-sin, sy=cos`.
pub fn rotate(degrees: f64) -> Affine {
    let theta = (degrees % 360.0).to_radians();
    if theta == 0.0 {
        return identity();
    }
    let (sin, cos) = theta.sin_cos();
    from_coeffs(cos, sin, -sin, cos, 0.0, 0.0)
}

/// Scale by `sx` and `sy`.
#[inline]
pub fn scale(sx: f64, sy: f64) -> Affine {
    from_coeffs(sx, 0.0, 0.0, sy, 0.0, 0.0)
}

/// Skew along x by `degrees`.
pub fn skew_x(degrees: f64) -> Affine {
    from_coeffs(1.0, 0.0, (degrees % 360.0).to_radians().tan(), 1.0, 0.0, 0.0)
}

/// Skew along y by `degrees`.
pub fn skew_y(degrees: f64) -> Affine {
    from_coeffs(1.0, (degrees % 360.0).to_radians().tan(), 0.0, 1.0, 0.0, 0.0)
}

/// Translate by `(x, y)`.
#[inline]
pub fn translate(x: f64, y: f64) -> Affine {
    from_coeffs(1.0, 0.0, 0.0, 1.0, x, y)
}

/// Maps the unit square onto `bounds`; used for object-relative clip units.
pub fn bounding_box(bounds: kurbo::Rect) -> Affine {
    from_coeffs(bounds.x1, 0.0, 0.0, bounds.y1, bounds.x0, bounds.y0)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
