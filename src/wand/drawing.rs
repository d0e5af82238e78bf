use std::{collections::BTreeSet, fmt};

use crate::{
    context::{graphic::GraphicContext, stack::GraphicContextStack},
    emit::buffer::MvgBuffer,
    foundation::error::{WandError, WandResult},
    path::state::PathState,
    target::{
        color::{ColorResolver, NamedColors},
        encode::{ImageEncoder, PngEncoder},
        image::TargetImage,
        raster::Rasterizer,
    },
    wand::{definitions::PatternCapture, settings::WandSettings},
};

/// Compiles imperative drawing calls into an MVG instruction stream.
///
/// A wand is bound to one [`TargetImage`] for its whole life. Each call formats one
/// instruction into the wand's buffer and records its side effects in the current
/// [`GraphicContext`]; [`render`](Self::render) hands the finished program to a
/// [`Rasterizer`].
///
/// A wand is a plain single-owner value: callers that share one across threads must
/// serialize access themselves.
pub struct DrawingWand<'img> {
    pub(super) image: &'img mut TargetImage,
    pub(super) settings: WandSettings,
    pub(super) output: MvgBuffer,
    pub(super) contexts: GraphicContextStack,
    pub(super) path: PathState,
    pub(super) pattern: Option<PatternCapture>,
    pub(super) clip_stack: Vec<String>,
    pub(super) defs_depth: usize,
    pub(super) clip_paths: BTreeSet<String>,
    pub(super) filtering: bool,
    pub(super) colors: Box<dyn ColorResolver>,
    pub(super) encoder: Box<dyn ImageEncoder>,
    poisoned: bool,
    last_error: Option<String>,
}

impl fmt::Debug for DrawingWand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawingWand")
            .field("image", &(self.image.width, self.image.height))
            .field("output_len", &self.output.len())
            .field("context_depth", &self.contexts.depth())
            .field("pattern", &self.pattern)
            .field("filtering", &self.filtering)
            .field("poisoned", &self.poisoned)
            .finish_non_exhaustive()
    }
}

impl<'img> DrawingWand<'img> {
    /// Wand with default settings.
    pub fn new(image: &'img mut TargetImage) -> Self {
        Self::with_settings(image, WandSettings::default())
    }

    /// Wand with `settings`.
    pub fn with_settings(image: &'img mut TargetImage, settings: WandSettings) -> Self {
        Self {
            image,
            output: MvgBuffer::with_limits(settings.wrap_column, settings.max_output_bytes),
            settings,
            contexts: GraphicContextStack::new(),
            path: PathState::default(),
            pattern: None,
            clip_stack: Vec::new(),
            defs_depth: 0,
            clip_paths: BTreeSet::new(),
            filtering: true,
            colors: Box::new(NamedColors),
            encoder: Box::new(PngEncoder),
            poisoned: false,
            last_error: None,
        }
    }

    /// Replace the color resolver.
    pub fn with_color_resolver(mut self, colors: impl ColorResolver + 'static) -> Self {
        self.colors = Box::new(colors);
        self
    }

    /// Replace the sub-image encoder used by composites.
    pub fn with_encoder(mut self, encoder: impl ImageEncoder + 'static) -> Self {
        self.encoder = Box::new(encoder);
        self
    }

    /// Settings in effect.
    pub fn settings(&self) -> &WandSettings {
        &self.settings
    }

    /// The target image.
    pub fn image(&self) -> &TargetImage {
        &*self.image
    }

    /// The compiled instruction text so far.
    pub fn vector_graphics(&self) -> &str {
        self.output.as_str()
    }

    /// Current graphic context.
    pub fn context(&self) -> &GraphicContext {
        self.contexts.current()
    }

    /// Number of graphic contexts, root included.
    pub fn context_depth(&self) -> usize {
        self.contexts.depth()
    }

    /// Indentation depth of the instruction text.
    pub fn indent_depth(&self) -> usize {
        self.output.indent()
    }

    /// Compaction state of the open path.
    pub fn path_state(&self) -> PathState {
        self.path
    }

    /// `false` while a pattern or clip-path definition is open.
    pub fn is_filtering(&self) -> bool {
        self.filtering
    }

    /// `true` after an allocation failure, until [`clear`](Self::clear).
    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    /// Message of the most recent failed call, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Forget the last error message.
    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Start a nested scope: clone the current context and indent.
    pub fn push_graphic_context(&mut self) -> WandResult<()> {
        self.emit(format_args!("push graphic-context\n"))?;
        self.contexts.push();
        self.output.indent_in();
        Ok(())
    }

    /// Close the innermost scope. Fails with [`WandError::UnbalancedContextStack`] at the root.
    pub fn pop_graphic_context(&mut self) -> WandResult<()> {
        self.ensure_usable()?;
        if self.contexts.depth() <= 1 {
            return Err(self.fail(WandError::UnbalancedContextStack));
        }
        self.output.indent_out();
        if let Err(err) = self.output.write(format_args!("pop graphic-context\n")) {
            self.output.indent_in();
            return Err(self.fail(err));
        }
        self.contexts.pop()?;
        Ok(())
    }

    /// `#text` comment line.
    pub fn comment(&mut self, text: &str) -> WandResult<()> {
        self.emit(format_args!("#{text}\n"))
    }

    /// Hand the program and the current context to `rasterizer`.
    #[tracing::instrument(skip(self, rasterizer), fields(program_len = self.output.len()))]
    pub fn render(&mut self, rasterizer: &mut dyn Rasterizer) -> WandResult<()> {
        self.ensure_usable()?;
        let res = rasterizer.draw(
            &mut *self.image,
            self.output.as_str(),
            self.contexts.current(),
        );
        res.map_err(|err| self.fail(err))
    }

    /// Drop the instruction text; contexts and definitions are kept.
    pub fn reset_vector_graphics(&mut self) {
        self.output.clear();
        self.path.reset();
        if let Some(capture) = self.pattern.as_mut() {
            capture.offset = 0;
        }
    }

    /// Return to the freshly constructed state (the target image's artifacts are kept).
    pub fn clear(&mut self) {
        self.output.reset();
        self.contexts.reset();
        self.path.reset();
        self.pattern = None;
        self.clip_stack.clear();
        self.defs_depth = 0;
        self.clip_paths.clear();
        self.filtering = true;
        self.poisoned = false;
        self.last_error = None;
    }

    pub(super) fn emit(&mut self, args: fmt::Arguments<'_>) -> WandResult<()> {
        self.ensure_usable()?;
        match self.output.write(args) {
            Ok(_) => Ok(()),
            Err(err) => Err(self.fail(err)),
        }
    }

    pub(super) fn emit_wrapped(&mut self, args: fmt::Arguments<'_>) -> WandResult<()> {
        self.ensure_usable()?;
        match self.output.write_wrapped(args) {
            Ok(_) => Ok(()),
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Run several emits as one instruction: on failure the buffer is rewound to where it was.
    pub(super) fn emit_atomic(
        &mut self,
        write: impl FnOnce(&mut Self) -> WandResult<()>,
    ) -> WandResult<()> {
        let mark = self.output.mark();
        let res = write(self);
        if res.is_err() {
            self.output.rewind(mark);
        }
        res
    }

    pub(super) fn ensure_usable(&mut self) -> WandResult<()> {
        if self.poisoned {
            return Err(self.fail(WandError::Poisoned));
        }
        Ok(())
    }

    /// `true` when a setter must write: filtering is off or the value differs.
    pub(super) fn should_emit(&self, differs: bool) -> bool {
        !self.filtering || differs
    }

    pub(super) fn current_mut(&mut self) -> &mut GraphicContext {
        self.contexts.current_mut()
    }

    /// Record `err` as the wand's last error; allocation failures poison the wand.
    pub(super) fn fail(&mut self, err: WandError) -> WandError {
        if matches!(err, WandError::OutOfMemory) && !self.poisoned {
            tracing::warn!(
                output_len = self.output.len(),
                "instruction buffer allocation failed; wand poisoned"
            );
            self.poisoned = true;
        }
        self.last_error = Some(err.to_string());
        err
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wand/drawing.rs"]
mod tests;
