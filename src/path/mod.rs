/// Command-letter compaction for path data.
pub mod state;
