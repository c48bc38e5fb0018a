//! neon37-presets - Factory preset bank generator for the Neon-37 synthesizer.
//!
//! This library provides the preset catalog, the XML template and the
//! generation driver used by the `neon37-presets` binary.

pub mod generate;
pub mod preset;

// Re-export commonly used types
pub use generate::{generate_all, generate_with, GenerationReport, DEFAULT_BASE_PATH};
pub use preset::{emit, render_preset, PresetError, PresetRecord, CATALOG};
