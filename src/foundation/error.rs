/// Convenience result type used across the wand.
pub type WandResult<T> = Result<T, WandError>;

/// How a [`WandError`] should be treated by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Programming-contract violation (unbalanced stack, absent argument).
    Contract,
    /// Resource exhaustion; the wand is poisoned.
    Resource,
    /// The single call failed and left all state unchanged.
    Recoverable,
}

/// Every way a wand call can fail.
#[derive(thiserror::Error, Debug)]
pub enum WandError {
    /// Pop of the root graphic context.
    #[error("contract error: unbalanced graphic-context push/pop")]
    UnbalancedContextStack,

    /// A required argument was empty.
    #[error("contract error: missing required argument `{0}`")]
    MissingArgument(&'static str),

    /// The instruction buffer could not grow (or hit `max_output_bytes`).
    #[error("resource error: unable to grow instruction buffer")]
    OutOfMemory,

    /// The wand failed an allocation earlier and refuses further writes.
    #[error("resource error: wand is unusable after an allocation failure")]
    Poisoned,

    /// Color name the resolver does not know.
    #[error("draw error: unrecognized color `{0}`")]
    UnknownColor(String),

    /// Pattern or clip-path id that was never defined.
    #[error("draw error: reference to undefined id `{0}`")]
    UndefinedReference(String),

    /// Paint URL that does not start with `#`.
    #[error("draw error: not a relative url `{0}`")]
    NotARelativeUrl(String),

    /// `push pattern` while another pattern is open.
    #[error("draw error: already pushing pattern definition `{0}`")]
    PatternAlreadyOpen(String),

    /// `pop` of a definition kind that is not open.
    #[error("draw error: not currently pushing a {0} definition")]
    UnbalancedDefinition(&'static str),

    /// Instruction text could not be formatted.
    #[error("format error: {0}")]
    Format(String),

    /// Invalid caller or script data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from encoders or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WandError {
    /// Build a [`WandError::Format`] value.
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Build a [`WandError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WandError::UnknownColor`] value.
    pub fn unknown_color(name: impl Into<String>) -> Self {
        Self::UnknownColor(name.into())
    }

    /// Build a [`WandError::UndefinedReference`] value.
    pub fn undefined_reference(id: impl Into<String>) -> Self {
        Self::UndefinedReference(id.into())
    }

    /// Error class of this failure.
    pub fn severity(&self) -> Severity {
        match self {
            Self::UnbalancedContextStack | Self::MissingArgument(_) => Severity::Contract,
            Self::OutOfMemory | Self::Poisoned => Severity::Resource,
            Self::UnknownColor(_)
            | Self::UndefinedReference(_)
            | Self::NotARelativeUrl(_)
            | Self::PatternAlreadyOpen(_)
            | Self::UnbalancedDefinition(_)
            | Self::Format(_)
            | Self::Validation(_)
            | Self::Other(_) => Severity::Recoverable,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
