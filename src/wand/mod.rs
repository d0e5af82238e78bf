//! The drawing wand: attribute setters, primitives, path data, transforms, named
//! definitions and inline composites, all writing into one instruction buffer.

mod attributes;
/// Inline image compositing.
pub mod composite;
/// Pattern, clip-path and defs brackets.
pub mod definitions;
/// The wand itself and its scope operations.
pub mod drawing;
mod path;
/// Shapes, text and paint primitives.
pub mod primitives;
/// Wand configuration.
pub mod settings;
mod transform;

pub use attributes::EPSILON;
