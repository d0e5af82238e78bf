//! `%g`-style number formatting used by every emitted instruction.

use std::fmt;

/// Formats an `f64` with `P` significant digits the way C's `%.Pg` does.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SigFig<const P: usize>(pub f64);

/// Coordinates, sizes and other geometry (`%.4g`).
pub type G4 = SigFig<4>;
/// Raw affine coefficients (`%.6g`).
pub type G6 = SigFig<6>;

/// Wraps `v` for `%.4g` display.
#[allow(non_snake_case)]
pub const fn G4(v: f64) -> G4 {
    SigFig(v)
}

/// Wraps `v` for `%.6g` display.
#[allow(non_snake_case)]
pub const fn G6(v: f64) -> G6 {
    SigFig(v)
}

impl<const P: usize> fmt::Display for SigFig<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            return f.write_str("nan");
        }
        if v.is_infinite() {
            return f.write_str(if v < 0.0 { "-inf" } else { "inf" });
        }
        if v == 0.0 {
            return f.write_str(if v.is_sign_negative() { "-0" } else { "0" });
        }

        let precision = P.max(1);
        // Round to the requested significant digits first; the exponent of the rounded value
        // decides between fixed and scientific notation.
        let sci = format!("{:.*e}", precision - 1, v);
        let Some((mantissa, exp)) = sci.split_once('e') else {
            return f.write_str(&sci);
        };
        let exp: i32 = exp.parse().unwrap_or(0);

        if exp < -4 || exp >= precision as i32 {
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", trim_fraction(mantissa), sign, exp.unsigned_abs())
        } else {
            let decimals = (precision as i32 - 1 - exp).max(0) as usize;
            let fixed = format!("{:.*}", decimals, v);
            f.write_str(trim_fraction(&fixed))
        }
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/number.rs"]
mod tests;
