use crate::{
    context::graphic::GraphicContext,
    foundation::error::{WandError, WandResult},
};

/// Non-empty stack of graphic contexts; only the top is mutable.
#[derive(Clone, Debug)]
pub struct GraphicContextStack {
    root: GraphicContext,
    pushed: Vec<GraphicContext>,
}

impl Default for GraphicContextStack {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicContextStack {
    /// Stack holding only a default root context.
    pub fn new() -> Self {
        Self::with_root(GraphicContext::default())
    }

    /// Stack holding only `root`.
    pub fn with_root(root: GraphicContext) -> Self {
        Self {
            root,
            pushed: Vec::new(),
        }
    }

    /// Top context.
    pub fn current(&self) -> &GraphicContext {
        self.pushed.last().unwrap_or(&self.root)
    }

    /// Top context, the only mutable one.
    pub fn current_mut(&mut self) -> &mut GraphicContext {
        self.pushed.last_mut().unwrap_or(&mut self.root)
    }

    /// Bottom context, never popped.
    pub fn root(&self) -> &GraphicContext {
        &self.root
    }

    /// Number of contexts, root included (always at least 1).
    pub fn depth(&self) -> usize {
        self.pushed.len() + 1
    }

    /// Push a clone of the top context.
    pub fn push(&mut self) {
        let top = self.current().clone();
        self.pushed.push(top);
    }

    /// Removes and returns the top context. Popping the root is an error.
    pub fn pop(&mut self) -> WandResult<GraphicContext> {
        self.pushed.pop().ok_or(WandError::UnbalancedContextStack)
    }

    /// Drop every pushed context and restore a default root.
    pub fn reset(&mut self) {
        self.pushed.clear();
        self.root = GraphicContext::default();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/context/stack.rs"]
mod tests;
