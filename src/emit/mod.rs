/// Growable, indentation-aware instruction text buffer.
pub mod buffer;
