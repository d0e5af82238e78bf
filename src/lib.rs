//! mvgwand compiles imperative vector-drawing calls into an MVG instruction stream.
//!
//! A [`DrawingWand`] is bound to one [`TargetImage`]. Every call (an attribute setter, a shape,
//! a path segment, a transform, a pattern definition, an inline composite) formats one
//! instruction into the wand's buffer and records its side effects in the current
//! [`GraphicContext`]. The finished text is handed to a [`Rasterizer`] by
//! [`DrawingWand::render`].
//!
//! # Pipeline overview
//!
//! 1. **Drive**: call wand operations directly, or [`replay`] a serialized [`DrawCommand`] list
//! 2. **Compile**: setters elide redundant writes, path segments share command letters, transforms
//!    fold into the context's cumulative affine
//! 3. **Publish**: finished patterns land on the target image as `[id]` artifacts
//! 4. **Render** (optional): a [`Rasterizer`] consumes the program
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Fail without side effects**: a failed call leaves the wand's state as it was, except that
//!   an allocation failure poisons the wand.
//! - **Single owner**: a wand is not synchronized; callers sharing one must serialize access.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod context;
mod emit;
mod foundation;
mod path;
mod script;
mod target;
mod wand;

/// Pure 2x3 affine helpers used for the cumulative transform.
pub mod transform;

pub use context::graphic::{
    ClipUnits, FillRule, FontStretch, FontStyle, GraphicContext, Gravity, LineCap, LineJoin,
    TextAlignment, TextDecoration, TextDirection,
};
pub use context::stack::GraphicContextStack;
pub use emit::buffer::{DEFAULT_WRAP_COLUMN, Mark, MvgBuffer, SCRATCH_LIMIT};
pub use foundation::core::{Affine, Point, Rect, Rgba8, alpha_to_opacity, opacity_to_alpha};
pub use foundation::error::{Severity, WandError, WandResult};
pub use foundation::number::{G4, G6, SigFig};
pub use path::state::{PathMode, PathOperation, PathState, PathToken};
pub use script::command::{DrawCommand, ReplayError, load_script, parse_script, replay};
pub use target::color::{ColorResolver, NamedColors, parse_color};
pub use target::encode::{EncodedImage, ImageEncoder, PngEncoder, base64_lines};
pub use target::image::TargetImage;
pub use target::raster::Rasterizer;
pub use wand::EPSILON;
pub use wand::composite::CompositeOperator;
pub use wand::definitions::{PatternBounds, PatternCapture};
pub use wand::drawing::DrawingWand;
pub use wand::primitives::PaintMethod;
pub use wand::settings::{DEFAULT_BASE64_LINE_WIDTH, PatternGeometryKey, WandSettings};
