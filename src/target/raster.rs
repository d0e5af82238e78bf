use crate::{
    context::graphic::GraphicContext, foundation::error::WandResult, target::image::TargetImage,
};

/// Consumer of a compiled program.
///
/// Invoked once per [`render`](crate::DrawingWand::render) with the whole instruction text and
/// the wand's current graphic context.
pub trait Rasterizer {
    /// Draw `program` onto `image`.
    fn draw(
        &mut self,
        image: &mut TargetImage,
        program: &str,
        context: &GraphicContext,
    ) -> WandResult<()>;
}
