use std::fmt;

/// Kind of path-data command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PathOperation {
    /// Nothing emitted yet in this path.
    #[default]
    None,
    /// `Z`: close the subpath.
    Close,
    /// `C`: cubic Bezier.
    CurveTo,
    /// `Q`: quadratic Bezier.
    QuadraticBezier,
    /// `T`: quadratic Bezier with a reflected control point.
    QuadraticBezierSmooth,
    /// `S`: cubic Bezier with a reflected first control point.
    SmoothCurve,
    /// `A`: elliptical arc.
    EllipticArc,
    /// `H`: horizontal line.
    LineHorizontal,
    /// `L`: straight line.
    LineTo,
    /// `V`: vertical line.
    LineVertical,
    /// `M`: start a new subpath.
    MoveTo,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Coordinate mode of a path command.
///
/// Operations given `None` are written and recorded as absolute.
pub enum PathMode {
    /// No mode yet.
    #[default]
    None,
    /// Uppercase letter, absolute coordinates.
    Absolute,
    /// Lowercase letter, coordinates relative to the current point.
    Relative,
}

impl PathOperation {
    /// SVG path-data command letter; uppercase unless `mode` is relative.
    pub fn letter(self, mode: PathMode) -> Option<char> {
        let upper = match self {
            Self::None => return None,
            Self::Close => 'Z',
            Self::CurveTo => 'C',
            Self::QuadraticBezier => 'Q',
            Self::QuadraticBezierSmooth => 'T',
            Self::SmoothCurve => 'S',
            Self::EllipticArc => 'A',
            Self::LineHorizontal => 'H',
            Self::LineTo => 'L',
            Self::LineVertical => 'V',
            Self::MoveTo => 'M',
        };
        Some(match mode {
            PathMode::Relative => upper.to_ascii_lowercase(),
            PathMode::Absolute | PathMode::None => upper,
        })
    }
}

/// What to write before a path operation's coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathToken {
    /// First command of the path: the bare letter.
    First(char),
    /// A new command after earlier ones: space, then the letter.
    Command(char),
    /// Same operation and mode as the previous call: just a separating space.
    Continue,
}

impl fmt::Display for PathToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First(c) => write!(f, "{c}"),
            Self::Command(c) => write!(f, " {c}"),
            Self::Continue => f.write_str(" "),
        }
    }
}

/// Last emitted path operation and coordinate mode inside a `path '...'` bracket.
///
/// The command letter is elided when an operation repeats the previous `(operation, mode)`
/// pair exactly; close never continues since it carries no coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PathState {
    operation: PathOperation,
    mode: PathMode,
}

impl PathState {
    /// Last emitted operation.
    pub fn operation(&self) -> PathOperation {
        self.operation
    }

    /// Mode of the last emitted operation.
    pub fn mode(&self) -> PathMode {
        self.mode
    }

    /// Forget the last operation, as at the start of a path.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Decide the token for `(operation, mode)` and record it as the latest state.
    pub fn advance(&mut self, operation: PathOperation, mode: PathMode) -> PathToken {
        if operation != PathOperation::Close && self.operation == operation && self.mode == mode {
            return PathToken::Continue;
        }

        let first = self.operation == PathOperation::None;
        self.operation = operation;
        self.mode = mode;
        let letter = operation.letter(mode).unwrap_or('?');
        if first {
            PathToken::First(letter)
        } else {
            PathToken::Command(letter)
        }
    }

    /// Peek the token [`advance`](Self::advance) would produce without recording it.
    pub fn preview(&self, operation: PathOperation, mode: PathMode) -> PathToken {
        let mut probe = *self;
        probe.advance(operation, mode)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/state.rs"]
mod tests;
