//! Bank generation driver.
//!
//! Walks the catalog in bank order, creates each category folder under the
//! base path and emits every preset it contains.

use crate::preset::{emit, PresetError, CATALOG, PRIOR_PRESET_COUNT};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Default output directory, relative to the working directory.
pub const DEFAULT_BASE_PATH: &str = "presets";

/// Summary of a generation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationReport {
    /// Files written, in the order they were written.
    pub written: Vec<PathBuf>,
    /// Number of presets written by this run.
    pub total_created: usize,
    /// Size of the full bank including presets not produced here.
    pub collection_total: usize,
}

impl GenerationReport {
    fn record(&mut self, path: PathBuf) {
        self.written.push(path);
        self.total_created += 1;
        self.collection_total = PRIOR_PRESET_COUNT + self.total_created;
    }
}

/// Generates the whole catalog under `base`.
///
/// # Errors
///
/// Returns the first filesystem error encountered. Files written before the
/// failure are left in place.
pub fn generate_all(base: &Path) -> Result<GenerationReport, PresetError> {
    generate_with(base, |_| {})
}

/// Generates the whole catalog, calling `on_written` after each file.
///
/// # Arguments
///
/// * `base` - Root directory for the category folders
/// * `on_written` - Callback receiving the path of every written file
pub fn generate_with<F>(base: &Path, mut on_written: F) -> Result<GenerationReport, PresetError>
where
    F: FnMut(&Path),
{
    let mut report = GenerationReport {
        collection_total: PRIOR_PRESET_COUNT,
        ..Default::default()
    };

    for category in CATALOG {
        // emit creates the folder before the first write
        let folder = base.join(category.folder);
        tracing::info!(
            "Generating {} presets for {}",
            category.presets.len(),
            category.label()
        );

        for record in category.records() {
            let path = emit(record.id, record.name, &folder, record.category_label())?;
            on_written(&path);
            report.record(path);
        }
    }

    tracing::info!(
        "Created {} presets ({} in collection)",
        report.total_created,
        report.collection_total
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_totals() {
        let mut report = GenerationReport::default();
        report.record(PathBuf::from("a.xml"));
        report.record(PathBuf::from("b.xml"));
        assert_eq!(report.total_created, 2);
        assert_eq!(report.collection_total, PRIOR_PRESET_COUNT + 2);
    }

    #[test]
    fn test_report_json() {
        let mut report = GenerationReport::default();
        report.record(PathBuf::from("007_Ensemble/049_Choir_Aahs.xml"));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["total_created"], 1);
        assert_eq!(json["collection_total"], 49);
        assert_eq!(json["written"][0], "007_Ensemble/049_Choir_Aahs.xml");
    }
}
