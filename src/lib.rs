// Public API exports
pub mod board;
pub mod export;
pub mod presets;
pub mod roster;
pub mod shuffler;

// Re-export main types for convenience
pub use board::{BoardError, Group, GroupBoard};

pub use export::{render_json, render_markdown, render_text, DocxWriter};

pub use presets::{Preset, PresetStore};

pub use roster::{duplicates, parse, validate, RosterError};

pub use shuffler::{partition, partition_with, shuffle, shuffle_with};
