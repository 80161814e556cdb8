//! Lazy, once-only configuration resolution

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use crate::console::Console;

use super::env::Environment;
use super::file::load_cli_section;
use super::toml_schema::CliSection;

/// Conventional config file name, resolved against the current working
/// directory.
pub const CONFIG_FILE_NAME: &str = "pyproject.toml";

/// Resolved configuration values.
///
/// Also the seed shape for [`ConfigResolver::with_values`]: a seeded field
/// survives the load unless the config file sets the same key.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CliValues {
    pub module: Option<String>,
    pub site: Option<String>,
    pub collection: Option<String>,
    pub editor: Option<String>,
}

/// Reads `[tool.render-engine.cli]` values from a pyproject.toml, at most
/// once per instance.
///
/// The file is consulted lazily, on the first accessor call or an explicit
/// [`load`](ConfigResolver::load). A missing or malformed file degrades to
/// the constructed defaults with a console notice; accessors never fail.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    config_path: Option<PathBuf>,
    seeds: CliValues,
    env: Environment,
    console: Console,
    cached: OnceCell<CliValues>,
}

impl ConfigResolver {
    /// Resolver bound to `pyproject.toml` in the current working directory.
    pub fn new() -> Self {
        Self::from_path(CONFIG_FILE_NAME)
    }

    /// Resolver bound to an explicit config file path.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: Some(path.into()),
            seeds: CliValues::default(),
            env: Environment::capture(),
            console: Console::auto(),
            cached: OnceCell::new(),
        }
    }

    /// Resolver with loading disabled. Accessors return the constructed
    /// defaults without touching the filesystem or printing notices.
    pub fn detached() -> Self {
        let mut resolver = Self::new();
        resolver.config_path = None;
        resolver
    }

    /// Replaces the environment snapshot captured at construction.
    pub fn with_environment(mut self, env: Environment) -> Self {
        self.env = env;
        self
    }

    /// Replaces the output channel, e.g. with [`Console::quiet`].
    pub fn with_console(mut self, console: Console) -> Self {
        self.console = console;
        self
    }

    /// Seeds field values ahead of the load.
    ///
    /// A seeded `editor` takes priority over the environment snapshot; the
    /// config file still overrides both.
    pub fn with_values(mut self, values: CliValues) -> Self {
        self.seeds = values;
        self
    }

    /// Resolves now instead of on the first accessor call.
    ///
    /// Idempotent: once values are cached this does no further I/O and
    /// prints nothing.
    pub fn load(&self) {
        let _ = self.values();
    }

    /// True once a resolution has happened, whether or not a file was read
    /// successfully.
    pub fn is_loaded(&self) -> bool {
        self.cached.get().is_some()
    }

    /// Path the resolver reads from. `None` means loading is disabled.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn module(&self) -> Option<&str> {
        self.values().module.as_deref()
    }

    pub fn site(&self) -> Option<&str> {
        self.values().site.as_deref()
    }

    /// The `module:site` form the CLI passes to its subcommands. `None`
    /// unless both parts are present.
    pub fn module_site(&self) -> Option<String> {
        let values = self.values();
        match (&values.module, &values.site) {
            (Some(module), Some(site)) => Some(format!("{module}:{site}")),
            _ => None,
        }
    }

    pub fn collection(&self) -> Option<&str> {
        self.values().collection.as_deref()
    }

    pub fn editor(&self) -> Option<&str> {
        self.values().editor.as_deref()
    }

    fn values(&self) -> &CliValues {
        self.cached.get_or_init(|| self.resolve())
    }

    /// Field values before any config file is consulted: the seeds, with the
    /// environment editor filling an unseeded `editor`.
    fn constructed_defaults(&self) -> CliValues {
        let mut values = self.seeds.clone();
        if values.editor.is_none() {
            values.editor = self.env.editor.clone();
        }
        values
    }

    /// The one-time resolution: read the file, overlay its keys onto the
    /// constructed defaults, report the outcome. Load failures are absorbed
    /// and leave the defaults in place.
    fn resolve(&self) -> CliValues {
        let defaults = self.constructed_defaults();
        let Some(path) = self.config_path.as_deref() else {
            return defaults;
        };

        match load_cli_section(path) {
            Ok(section) => {
                self.console.config_loaded(path);
                overlay(section, defaults)
            }
            Err(err) if err.is_not_found() => {
                self.console.config_missing(path);
                defaults
            }
            Err(err) => {
                self.console.config_error(&err);
                defaults
            }
        }
    }
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Keys set in the config file win; absent keys keep the default.
fn overlay(section: CliSection, defaults: CliValues) -> CliValues {
    CliValues {
        module: section.module.or(defaults.module),
        site: section.site.or(defaults.site),
        collection: section.collection.or(defaults.collection),
        editor: section.editor.or(defaults.editor),
    }
}
