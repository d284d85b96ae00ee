//! Handlers for the resource commands (`parse`, `describe`, `copy`).

use std::path::Path;

use launchpad_content::{
    extract_description, parse_content, section_icon, section_label, ParsedContent,
};
use launchpad_core::{
    format_resource_name, name_from_path, read_resource_content, ClipboardFormatter, Error,
    Resource, Result, Selection,
};

use crate::config::OutputFormat;

// ============================================================================
// parse
// ============================================================================

/// Read and parse a resource file, rendering it in `format`.
pub async fn cmd_parse(file: &Path, format: OutputFormat) -> Result<String> {
    let content = read_resource_content(file).await?;
    let parsed = parse_content(&content);
    tracing::debug!(
        file = %file.display(),
        sections = parsed.sections.len(),
        has_frontmatter = parsed.has_frontmatter(),
        "parsed resource"
    );
    match format {
        OutputFormat::Text => Ok(render_parsed_text(&parsed)),
        OutputFormat::Json => serde_json::to_string_pretty(&parsed)
            .map_err(|e| Error::serialization(format!("parsed content: {e}"))),
    }
}

/// Render parsed content as a plain-text preview.
///
/// Frontmatter, each section, and the remaining content form blocks separated
/// by a blank line.
pub fn render_parsed_text(parsed: &ParsedContent) -> String {
    let mut blocks = Vec::new();

    if let Some(fields) = &parsed.frontmatter {
        let lines: Vec<String> = fields
            .iter()
            .map(|(key, value)| format!("  {key}: {value}"))
            .collect();
        blocks.push(format!("Frontmatter:\n{}", lines.join("\n")));
    }

    for section in &parsed.sections {
        let body: String = section
            .content
            .lines()
            .map(|line| format!("\n  {line}"))
            .collect();
        blocks.push(format!(
            "{} {}{body}",
            section_icon(&section.tag),
            section_label(&section.tag)
        ));
    }

    if !parsed.remaining_content.is_empty() {
        blocks.push(parsed.remaining_content.clone());
    }

    if blocks.is_empty() {
        return String::new();
    }
    format!("{}\n", blocks.join("\n\n"))
}

// ============================================================================
// describe
// ============================================================================

/// Display name and one-line description of a resource file.
pub async fn cmd_describe(file: &Path) -> Result<String> {
    let content = read_resource_content(file).await?;
    let name = name_from_path(file)
        .map(|n| format_resource_name(&n))
        .unwrap_or_default();
    Ok(match extract_description(&content) {
        Some(description) => format!("{name}\n{description}"),
        None => name,
    })
}

// ============================================================================
// copy
// ============================================================================

/// Load a JSON catalog of resources.
pub async fn load_catalog(path: &Path) -> Result<Vec<Resource>> {
    let raw = read_resource_content(path).await?;
    serde_json::from_str(&raw)
        .map_err(|e| Error::parse(format!("invalid catalog {}: {e}", path.display())))
}

/// Clipboard text for `ids` (toggled in order) from the catalog at `catalog`.
pub async fn cmd_copy(
    catalog: &Path,
    project_root: Option<String>,
    ids: &[String],
) -> Result<String> {
    let resources = load_catalog(catalog).await?;
    let selection: Selection = ids.iter().map(String::as_str).collect();

    for id in selection.ids() {
        if !resources.iter().any(|r| r.id == id) {
            tracing::warn!(id, "selected id not in catalog");
        }
    }

    ClipboardFormatter::new(project_root)
        .format_selection(&selection, &resources)
        .ok_or_else(|| Error::not_found("no selected resource found in catalog"))
}
