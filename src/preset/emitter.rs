//! Preset document rendering and file output.
//!
//! Produces the `Neon37Preset` XML document consumed by the plugin's preset
//! browser. The layout is fixed: two-space indentation per level, `\n` line
//! endings and no trailing newline after the root element.

use super::parameters::{ParameterSet, DEFAULT_PARAMETERS};
use super::PresetError;
use std::fs;
use std::path::{Path, PathBuf};

/// XML declaration written at the top of every preset.
const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Root element name of a preset document.
const ROOT_ELEMENT: &str = "Neon37Preset";

/// Builds the on-disk file name for a preset.
///
/// # Arguments
///
/// * `id` - Preset number, zero-padded to three digits
/// * `name` - Display name; spaces become underscores
///
/// # Examples
///
/// ```
/// use neon37_presets::preset::preset_file_name;
///
/// assert_eq!(preset_file_name(49, "Choir Aahs"), "049_Choir_Aahs.xml");
/// assert_eq!(preset_file_name(128, "Explosion"), "128_Explosion.xml");
/// ```
pub fn preset_file_name(id: u16, name: &str) -> String {
    format!("{:03}_{}.xml", id, name.replace(' ', "_"))
}

/// Escapes a string for use inside a double-quoted XML attribute.
fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders a preset document with the default parameter template.
///
/// `name` and `category_label` go into the root element's attributes; the
/// parameter block is identical for every preset. Both attribute values are
/// XML-escaped (`&`, `<`, `>`, `"`), which leaves catalog names unchanged.
pub fn render_preset(name: &str, category_label: &str) -> String {
    render_document(name, category_label, &DEFAULT_PARAMETERS)
}

/// Renders a preset document from an explicit parameter set.
fn render_document(name: &str, category_label: &str, params: &ParameterSet) -> String {
    let mut lines = Vec::with_capacity(params.len() + 5);

    lines.push(XML_DECLARATION.to_string());
    lines.push(format!(
        r#"<{} name="{}" category="{}">"#,
        ROOT_ELEMENT,
        escape_attr(name),
        escape_attr(category_label)
    ));
    lines.push("  <Parameters>".to_string());
    lines.extend(
        params
            .entries()
            .iter()
            .map(|(id, value)| format!(r#"    <PARAM id="{}" value="{}"/>"#, id, value)),
    );
    lines.push("  </Parameters>".to_string());
    lines.push(format!("</{}>", ROOT_ELEMENT));

    // No trailing newline after the root element
    lines.join("\n")
}

/// Renders a preset and writes it into `category_dir`.
///
/// The directory is created if it does not exist. An existing file with the
/// same name is overwritten.
///
/// # Arguments
///
/// * `id` - Preset number
/// * `name` - Display name
/// * `category_dir` - Destination folder for the category
/// * `category_label` - Category attribute value
///
/// # Returns
///
/// The full path of the written file
///
/// # Errors
///
/// Returns error if the directory cannot be created or the file cannot be
/// written
pub fn emit(
    id: u16,
    name: &str,
    category_dir: &Path,
    category_label: &str,
) -> Result<PathBuf, PresetError> {
    fs::create_dir_all(category_dir).map_err(|source| PresetError::CreateDir {
        path: category_dir.to_path_buf(),
        source,
    })?;

    let path = category_dir.join(preset_file_name(id, name));
    let document = render_preset(name, category_label);

    fs::write(&path, document).map_err(|source| PresetError::Write {
        path: path.clone(),
        source,
    })?;

    tracing::debug!("Wrote preset {:03} {:?} to {:?}", id, name, path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::parameters::PARAMETER_COUNT;

    #[test]
    fn test_file_names() {
        assert_eq!(preset_file_name(49, "Choir Aahs"), "049_Choir_Aahs.xml");
        assert_eq!(preset_file_name(128, "Explosion"), "128_Explosion.xml");
        assert_eq!(preset_file_name(81, "Lead 1 Bright"), "081_Lead_1_Bright.xml");
    }

    #[test]
    fn test_root_attributes() {
        let doc = render_preset("Strings 1", "Ensemble");
        let mut lines = doc.lines();
        assert_eq!(lines.next(), Some(XML_DECLARATION));
        assert_eq!(
            lines.next(),
            Some(r#"<Neon37Preset name="Strings 1" category="Ensemble">"#)
        );
    }

    #[test]
    fn test_document_layout() {
        let doc = render_preset("Tuba", "Brass");
        let lines: Vec<&str> = doc.lines().collect();

        assert_eq!(lines.len(), PARAMETER_COUNT + 5);
        assert_eq!(lines[2], "  <Parameters>");
        assert_eq!(lines[3], r#"    <PARAM id="master_volume" value="0.0"/>"#);
        assert_eq!(lines[4], r#"    <PARAM id="master_tune" value="440.0"/>"#);
        assert_eq!(lines[lines.len() - 2], "  </Parameters>");
        assert_eq!(lines[lines.len() - 1], "</Neon37Preset>");
        assert!(!doc.ends_with('\n'));
    }

    #[test]
    fn test_parameter_block_is_shared() {
        let strip_header = |doc: String| doc.lines().skip(2).collect::<Vec<_>>().join("\n");
        assert_eq!(
            strip_header(render_preset("Sitar", "Ethnic")),
            strip_header(render_preset("Wind", "Sound_FX"))
        );
    }

    #[test]
    fn test_attribute_escaping() {
        let doc = render_preset(r#"Rock & "Roll" <1>"#, "FX");
        assert!(doc.contains(r#"name="Rock &amp; &quot;Roll&quot; &lt;1&gt;""#));
    }
}
