//! Collaborators outside the compiler: the target image, color lookup, sub-image encoding and
//! the rasterizer that consumes the finished program.

/// Color name resolution.
pub mod color;
/// Sub-image encoding for inline composites.
pub mod encode;
/// The image a wand draws on.
pub mod image;
/// The consumer of compiled programs.
pub mod raster;
