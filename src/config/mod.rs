//! Configuration support for render-engine CLI and API tooling.
//!
//! This module provides:
//! - Lazy, once-only resolution of `[tool.render-engine.cli]` values from
//!   `pyproject.toml`
//! - A typed, catchable error for direct loading
//! - An injectable environment snapshot for the `EDITOR` fallback

mod env;
mod file;
mod resolver;
mod toml_schema;

pub use env::Environment;
pub use file::{load_cli_section, ConfigError};
pub use resolver::{CliValues, ConfigResolver, CONFIG_FILE_NAME};
pub use toml_schema::{CliSection, PyprojectToml, RenderEngineSection, ToolSection};
