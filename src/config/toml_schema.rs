//! TOML schema definitions for the `[tool.render-engine.cli]` table

use serde::{Deserialize, Serialize};

/// Root structure for a pyproject.toml document.
///
/// Only the `tool.render-engine.cli` path is modeled. Everything else in the
/// document (project metadata, other tools) is ignored during
/// deserialization.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PyprojectToml {
    /// `[tool]` table
    #[serde(default)]
    pub tool: ToolSection,
}

/// `[tool]` table in pyproject.toml
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ToolSection {
    /// `[tool.render-engine]` table
    #[serde(default, rename = "render-engine")]
    pub render_engine: RenderEngineSection,
}

/// `[tool.render-engine]` table in pyproject.toml
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RenderEngineSection {
    /// `[tool.render-engine.cli]` table
    #[serde(default)]
    pub cli: CliSection,
}

/// `[tool.render-engine.cli]` table: the keys the CLI and API recognize
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CliSection {
    /// Import path of the module that defines the site
    pub module: Option<String>,

    /// Name of the site object inside that module
    pub site: Option<String>,

    /// Collection new entries are filed under
    pub collection: Option<String>,

    /// Editor command; takes priority over the EDITOR environment variable
    pub editor: Option<String>,
}

impl PyprojectToml {
    /// Extract the `tool.render-engine.cli` table.
    ///
    /// Absent intermediate tables collapse to an empty section, so callers
    /// never distinguish "no `[tool]`" from "empty `[tool.render-engine.cli]`".
    pub fn into_cli_section(self) -> CliSection {
        self.tool.render_engine.cli
    }
}
