//! Neon-37 preset data and file output.
//!
//! This module holds the factory catalog, the shared parameter template and
//! the emitter that turns a catalog entry into an XML file on disk.

mod catalog;
mod emitter;
mod parameters;

pub use catalog::{category_label, records, Category, PresetRecord, CATALOG};
pub use emitter::{emit, preset_file_name, render_preset};
pub use parameters::{ParamValue, ParameterSet, DEFAULT_PARAMETERS, PARAMETER_COUNT};

use std::path::PathBuf;
use thiserror::Error;

/// Number of presets in the bank that this generator does not produce
/// (001-048, shipped with the plugin).
pub const PRIOR_PRESET_COUNT: usize = 48;

/// Errors that can occur while writing presets.
#[derive(Debug, Error)]
pub enum PresetError {
    /// A category directory could not be created.
    #[error("failed to create directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A preset file could not be written.
    #[error("failed to write preset {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
