use std::path::Path;

use crate::colors::{should_use_colors, Colors};
use crate::config::ConfigError;

/// Output channel for configuration load notices.
///
/// Informational notices go to stdout and load failures to stderr. Embedders
/// that want no terminal output at all use [`Console::quiet`].
#[derive(Debug, Clone, Copy)]
pub struct Console {
    colors: Colors,
    quiet: bool,
}

impl Console {
    /// Styles notices when stdout is a terminal and `NO_COLOR` is unset.
    pub fn auto() -> Self {
        Self::new(should_use_colors())
    }

    pub fn new(use_colors: bool) -> Self {
        Self {
            colors: Colors::new(use_colors),
            quiet: false,
        }
    }

    /// Suppresses every notice.
    pub fn quiet() -> Self {
        Self {
            colors: Colors::new(false),
            quiet: true,
        }
    }

    pub fn config_loaded(&self, path: &Path) {
        if self.quiet {
            return;
        }
        println!(
            "{}Config loaded from{} {}",
            self.colors.success,
            self.colors.reset(),
            path.display()
        );
    }

    pub fn config_missing(&self, path: &Path) {
        if self.quiet {
            return;
        }
        println!(
            "{}No config file found at{} {}",
            self.colors.info,
            self.colors.reset(),
            path.display()
        );
    }

    /// Reports a failed load attempt with the underlying diagnostic on its
    /// own line.
    pub fn config_error(&self, err: &ConfigError) {
        if self.quiet {
            return;
        }
        let (verb, detail) = match err {
            ConfigError::Io(_, e) => ("reading", e.to_string()),
            ConfigError::Parse(_, e) => ("parsing", e.to_string()),
        };
        eprintln!(
            "{}Encountered an error while {} {}{}\n{}\n",
            self.colors.error,
            verb,
            err.path().display(),
            self.colors.reset(),
            detail
        );
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::auto()
    }
}
