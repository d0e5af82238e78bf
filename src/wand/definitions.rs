//! Named definitions: patterns, clip paths and `defs` brackets.
//!
//! A pattern's body is the instruction text written between its push and pop. On pop that
//! text is published on the target image under `[id]` together with the pattern's
//! `WxH+X+Y` bounds, so a later `fill url(#id)` can be resolved by the rasterizer.

use std::fmt;

use crate::{
    foundation::{
        error::{WandError, WandResult},
        number::G4,
    },
    wand::{drawing::DrawingWand, settings::PatternGeometryKey},
};

/// Artifact key a pattern's instruction text is published under.
pub(super) fn pattern_key(id: &str) -> String {
    format!("[{id}]")
}

fn geometry_key(id: &str) -> String {
    format!("[{id}]-geometry")
}

/// Integer pattern bounds. Origins round half up, extents round half down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PatternBounds {
    /// Left edge.
    pub x: i64,
    /// Top edge.
    pub y: i64,
    /// Width in pixels.
    pub width: u64,
    /// Height in pixels.
    pub height: u64,
}

impl PatternBounds {
    /// Round a floating-point rectangle.
    pub fn from_rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: (x - 0.5).ceil() as i64,
            y: (y - 0.5).ceil() as i64,
            width: (width + 0.5).floor().max(0.0) as u64,
            height: (height + 0.5).floor().max(0.0) as u64,
        }
    }
}

impl fmt::Display for PatternBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}{:+}{:+}", self.width, self.height, self.x, self.y)
    }
}

/// An open pattern definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternCapture {
    id: String,
    pub(super) offset: usize,
    bounds: PatternBounds,
}

impl PatternCapture {
    /// Pattern id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Buffer offset the captured body starts at.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Rounded pattern bounds.
    pub fn bounds(&self) -> PatternBounds {
        self.bounds
    }
}

impl DrawingWand<'_> {
    /// The open pattern definition, if any.
    pub fn pattern_capture(&self) -> Option<&PatternCapture> {
        self.pattern.as_ref()
    }

    /// Names of clip paths whose definitions have been completed.
    pub fn clip_path_ids(&self) -> impl Iterator<Item = &str> {
        self.clip_paths.iter().map(String::as_str)
    }

    /// Open a pattern definition. Only one pattern may be open at a time.
    pub fn push_pattern(
        &mut self,
        id: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> WandResult<()> {
        let id = self.require("pattern id", id)?;
        if let Some(open) = &self.pattern {
            let err = WandError::PatternAlreadyOpen(open.id.clone());
            return Err(self.fail(err));
        }
        self.emit(format_args!(
            "push pattern {id} {},{} {},{}\n",
            G4(x),
            G4(y),
            G4(width),
            G4(height)
        ))?;
        self.output.indent_in();
        self.pattern = Some(PatternCapture {
            id: id.to_owned(),
            offset: self.output.len(),
            bounds: PatternBounds::from_rect(x, y, width, height),
        });
        self.filtering = false;
        Ok(())
    }

    /// Close the open pattern and publish its body and bounds on the target image.
    pub fn pop_pattern(&mut self) -> WandResult<()> {
        self.ensure_usable()?;
        let Some(capture) = self.pattern.as_ref() else {
            return Err(self.fail(WandError::UnbalancedDefinition("pattern")));
        };

        let body = self.output.since(capture.offset).to_owned();
        self.output.indent_out();
        if let Err(err) = self.output.write(format_args!("pop pattern\n")) {
            self.output.indent_in();
            return Err(self.fail(err));
        }

        let geometry = capture.bounds.to_string();
        let key = pattern_key(&capture.id);
        tracing::debug!(
            id = %capture.id,
            body_len = body.len(),
            geometry = %geometry,
            "pattern published"
        );

        self.image.set_artifact(key.clone(), body);
        match self.settings.pattern_geometry_key {
            PatternGeometryKey::Separate => {
                self.image.set_artifact(geometry_key(&capture.id), geometry)
            }
            PatternGeometryKey::Shared => self.image.set_artifact(key, geometry),
        }

        self.pattern = None;
        self.restore_filtering();
        Ok(())
    }

    /// Open a clip-path definition; filtering is off until it closes.
    pub fn push_clip_path(&mut self, id: &str) -> WandResult<()> {
        let id = self.require("clip-path id", id)?;
        self.emit(format_args!("push clip-path {id}\n"))?;
        self.output.indent_in();
        self.clip_stack.push(id.to_owned());
        self.filtering = false;
        Ok(())
    }

    /// Close the innermost clip path; its id becomes referenceable by `set_clip_path`.
    pub fn pop_clip_path(&mut self) -> WandResult<()> {
        self.ensure_usable()?;
        if self.clip_stack.is_empty() {
            return Err(self.fail(WandError::UnbalancedDefinition("clip-path")));
        }
        self.output.indent_out();
        if let Err(err) = self.output.write(format_args!("pop clip-path\n")) {
            self.output.indent_in();
            return Err(self.fail(err));
        }
        if let Some(id) = self.clip_stack.pop() {
            self.clip_paths.insert(id);
        }
        self.restore_filtering();
        Ok(())
    }

    /// Open a `defs` bracket.
    pub fn push_defs(&mut self) -> WandResult<()> {
        self.emit(format_args!("push defs\n"))?;
        self.output.indent_in();
        self.defs_depth += 1;
        Ok(())
    }

    /// Close the innermost `defs` bracket.
    pub fn pop_defs(&mut self) -> WandResult<()> {
        self.ensure_usable()?;
        if self.defs_depth == 0 {
            return Err(self.fail(WandError::UnbalancedDefinition("defs")));
        }
        self.output.indent_out();
        if let Err(err) = self.output.write(format_args!("pop defs\n")) {
            self.output.indent_in();
            return Err(self.fail(err));
        }
        self.defs_depth -= 1;
        Ok(())
    }

    /// Filtering stays off while any definition is still open.
    fn restore_filtering(&mut self) {
        self.filtering = self.pattern.is_none() && self.clip_stack.is_empty();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wand/definitions.rs"]
mod tests;
