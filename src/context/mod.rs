/// Graphic context value type and its attribute enums.
pub mod graphic;
/// Push/pop stack of graphic contexts.
pub mod stack;
