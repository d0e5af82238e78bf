/// Serialized wand calls and their replay.
pub mod command;
