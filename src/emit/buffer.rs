use std::fmt::{self, Write as _};

use crate::foundation::error::{WandError, WandResult};

/// Column past which [`MvgBuffer::write_wrapped`] starts a new line.
pub const DEFAULT_WRAP_COLUMN: usize = 78;
/// Largest single wrapped write.
pub const SCRATCH_LIMIT: usize = 4096;

const GROWTH_SLACK: usize = 4096;
const SAFETY_MARGIN: usize = 256;

/// Buffer position taken before a multi-part write, restored with [`MvgBuffer::rewind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mark {
    len: usize,
    column: usize,
}

/// Append-only instruction text with indentation and column tracking.
///
/// Every write is padded with spaces until the current column reaches the indentation
/// depth, so nested scopes read as an indented listing. Growth is geometric and goes
/// through `try_reserve`, so an allocation failure surfaces as [`WandError::OutOfMemory`]
/// and leaves the already-written text untouched.
#[derive(Debug)]
pub struct MvgBuffer {
    text: String,
    scratch: String,
    column: usize,
    indent: usize,
    wrap_column: usize,
    limit: Option<usize>,
}

impl Default for MvgBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl MvgBuffer {
    /// Empty buffer with the default wrap column and no size limit.
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_WRAP_COLUMN, None)
    }

    /// `limit` caps the text length in bytes; exceeding it behaves like a failed allocation.
    pub fn with_limits(wrap_column: usize, limit: Option<usize>) -> Self {
        Self {
            text: String::new(),
            scratch: String::new(),
            column: 0,
            indent: 0,
            wrap_column,
            limit,
        }
    }

    /// Everything written so far.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Text length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// `true` when nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Characters since the last newline.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Current indentation depth.
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Text written since `offset`, or `""` if `offset` is past the end.
    pub fn since(&self, offset: usize) -> &str {
        self.text.get(offset..).unwrap_or("")
    }

    /// Indent following lines one more level.
    pub fn indent_in(&mut self) {
        self.indent += 1;
    }

    /// Indent one level less, never below zero.
    pub fn indent_out(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    /// Current end of the text and column.
    pub fn mark(&self) -> Mark {
        Mark {
            len: self.text.len(),
            column: self.column,
        }
    }

    /// Drops everything written after `mark`. A mark past the end is ignored.
    pub fn rewind(&mut self, mark: Mark) {
        if mark.len <= self.text.len() {
            self.text.truncate(mark.len);
            self.column = mark.column;
        }
    }

    /// Drops the text but keeps the indentation depth.
    pub fn clear(&mut self) {
        self.text.clear();
        self.column = 0;
    }

    /// Drops the text and the indentation.
    pub fn reset(&mut self) {
        self.clear();
        self.indent = 0;
    }

    /// Formatted write; returns the number of bytes appended, padding included.
    pub fn write(&mut self, args: fmt::Arguments<'_>) -> WandResult<usize> {
        self.render_scratch(args)?;
        let scratch = std::mem::take(&mut self.scratch);
        let res = self.append(&scratch);
        self.scratch = scratch;
        res
    }

    /// Like [`write`](Self::write), but starts a new line first when the rendered text would
    /// run past the wrap column.
    pub fn write_wrapped(&mut self, args: fmt::Arguments<'_>) -> WandResult<usize> {
        self.render_scratch(args)?;
        if self.scratch.len() > SCRATCH_LIMIT {
            return Err(WandError::format(format!(
                "wrapped write of {} bytes exceeds {SCRATCH_LIMIT}",
                self.scratch.len()
            )));
        }

        let mark = self.mark();
        let scratch = std::mem::take(&mut self.scratch);
        let res = (|| -> WandResult<usize> {
            let mut written = 0;
            if self.column + scratch.chars().count() > self.wrap_column && !scratch.ends_with('\n')
            {
                written += self.append("\n")?;
            }
            written += self.append(&scratch)?;
            Ok(written)
        })();
        self.scratch = scratch;
        if res.is_err() {
            self.rewind(mark);
        }
        res
    }

    fn render_scratch(&mut self, args: fmt::Arguments<'_>) -> WandResult<()> {
        self.scratch.clear();
        self.scratch
            .write_fmt(args)
            .map_err(|_| WandError::format("instruction formatting failed"))
    }

    fn append(&mut self, s: &str) -> WandResult<usize> {
        let pad = self.indent.saturating_sub(self.column);
        self.reserve(pad + s.len())?;

        self.text.extend(std::iter::repeat_n(' ', pad));
        self.column += pad;
        self.text.push_str(s);
        match s.rfind('\n') {
            Some(idx) => self.column = s[idx + 1..].chars().count(),
            None => self.column += s.chars().count(),
        }
        Ok(pad + s.len())
    }

    fn reserve(&mut self, additional: usize) -> WandResult<()> {
        let needed = self
            .text
            .len()
            .checked_add(additional)
            .ok_or(WandError::OutOfMemory)?;
        if self.limit.is_some_and(|limit| needed > limit) {
            return Err(WandError::OutOfMemory);
        }

        let wanted = needed.saturating_add(SAFETY_MARGIN);
        if wanted <= self.text.capacity() {
            return Ok(());
        }
        let target = wanted.max(
            self.text
                .capacity()
                .saturating_mul(2)
                .saturating_add(GROWTH_SLACK),
        );
        self.text
            .try_reserve_exact(target - self.text.len())
            .map_err(|_| WandError::OutOfMemory)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/emit/buffer.rs"]
mod tests;
