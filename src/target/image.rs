use std::collections::BTreeMap;

/// The image a wand draws on.
///
/// Only its size and attribute (artifact) table are visible to the compiler. Artifacts are a
/// plain key-value store: a second write to a key replaces the first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TargetImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    artifacts: BTreeMap<String, String>,
}

impl TargetImage {
    /// Image with no artifacts.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            artifacts: BTreeMap::new(),
        }
    }

    /// Store `value` under `key`, replacing any earlier value.
    pub fn set_artifact(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.artifacts.insert(key.into(), value.into());
    }

    /// Value stored under `key`.
    pub fn artifact(&self, key: &str) -> Option<&str> {
        self.artifacts.get(key).map(String::as_str)
    }

    /// Every artifact in key order.
    pub fn artifacts(&self) -> impl Iterator<Item = (&str, &str)> {
        self.artifacts
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
