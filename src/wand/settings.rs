use crate::emit::buffer::DEFAULT_WRAP_COLUMN;

/// Line width of inline base64 image data.
pub const DEFAULT_BASE64_LINE_WIDTH: usize = 76;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Where a finished pattern's geometry is published.
pub enum PatternGeometryKey {
    /// `[id]` holds the pattern text, `[id]-geometry` its `WxH+X+Y` bounds.
    #[default]
    Separate,
    /// Both go to `[id]`; the geometry write replaces the text.
    Shared,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Tunables for a [`DrawingWand`](crate::DrawingWand). Defaults keep the wire format stable.
pub struct WandSettings {
    /// Column past which coordinate lists wrap.
    pub wrap_column: usize,
    /// Characters per line of inline composite image data.
    pub base64_line_width: usize,
    /// Artifact key layout for published pattern geometry.
    pub pattern_geometry_key: PatternGeometryKey,
    /// Upper bound on the instruction text in bytes; exceeding it fails like an allocation.
    pub max_output_bytes: Option<usize>,
}

impl Default for WandSettings {
    fn default() -> Self {
        Self {
            wrap_column: DEFAULT_WRAP_COLUMN,
            base64_line_width: DEFAULT_BASE64_LINE_WIDTH,
            pattern_geometry_key: PatternGeometryKey::Separate,
            max_output_bytes: None,
        }
    }
}
