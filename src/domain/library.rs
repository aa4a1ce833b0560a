//! The tool library catalog.

use serde::{Deserialize, Serialize};

use super::tool::Tool;
use crate::format;

/// Ordered catalog of tools.
///
/// Order is display order and drives the numbering in
/// [`ToolLibrary::summarize_library`]. Duplicate names are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolLibrary {
    #[serde(default)]
    tools: Vec<Tool>,
}

impl ToolLibrary {
    pub fn new(tools: Vec<Tool>) -> Self {
        Self { tools }
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// First tool with exactly this name
    pub fn find(&self, name: &str) -> Option<&Tool> {
        self.tools.iter().find(|tool| tool.name() == name)
    }

    /// Numbered availability report, one line per tool:
    ///
    /// ```text
    /// Tool Library:
    /// 1. Band Saw (Available: 32)
    /// 2. Bow (Available: 17)
    /// ```
    pub fn summarize_library(&self) -> String {
        format::format_library(&self.tools)
    }

    /// Alias for [`ToolLibrary::summarize_library`]
    pub fn summarize(&self) -> String {
        self.summarize_library()
    }

    /// Every tool's catalog block, each followed by a `---` separator
    pub fn list_tools(&self) -> String {
        format::format_tool_list(&self.tools)
    }
}
