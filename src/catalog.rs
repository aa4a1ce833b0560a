//! Catalog loading from YAML or JSON files
//!
//! A catalog document is a `tools` list in the same shape the domain types
//! serialize to:
//!
//! ```yaml
//! tools:
//!   - name: Band Saw
//!     totalQuantity: 35
//!     reservations:
//!       - username: Hoppleypawz
//!         returnDate: June 01
//! ```

use std::path::Path;

use crate::domain::ToolLibrary;
use crate::error::{Result, ToolshedError};

/// Supported catalog document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
}

impl CatalogFormat {
    /// Pick a format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "yml" | "yaml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Load a catalog file, choosing the parser from its extension
pub fn load_catalog(path: impl AsRef<Path>) -> Result<ToolLibrary> {
    let path = path.as_ref();
    let format = CatalogFormat::from_path(path)
        .ok_or_else(|| ToolshedError::UnsupportedFormat(path.display().to_string()))?;

    log::debug!("Reading catalog from {}", path.display());
    let content = std::fs::read_to_string(path)?;

    let library = match format {
        CatalogFormat::Yaml => parse_yaml(&content)?,
        CatalogFormat::Json => parse_json(&content)?,
    };

    log::info!("Loaded {} tools from {}", library.len(), path.display());
    Ok(library)
}

/// Parse a YAML catalog document
pub fn parse_yaml(content: &str) -> Result<ToolLibrary> {
    let library: ToolLibrary = serde_yaml::from_str(content)
        .map_err(|e| ToolshedError::Catalog(format!("Failed to parse YAML: {}", e)))?;
    warn_overbooked(&library);
    Ok(library)
}

/// Parse a JSON catalog document
pub fn parse_json(content: &str) -> Result<ToolLibrary> {
    let library: ToolLibrary = serde_json::from_str(content)
        .map_err(|e| ToolshedError::Catalog(format!("Failed to parse JSON: {}", e)))?;
    warn_overbooked(&library);
    Ok(library)
}

// Overbooking is accepted as-is; availability goes negative.
fn warn_overbooked(library: &ToolLibrary) {
    for tool in library.tools().iter().filter(|tool| tool.is_overbooked()) {
        log::warn!(
            "Tool '{}' has {} reservations but only {} units",
            tool.name(),
            tool.reservations().len(),
            tool.total_quantity()
        );
    }
}
