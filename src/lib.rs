pub mod colors;
pub mod config;
mod console;

pub use colors::{should_use_colors, Colors};
pub use config::{
    load_cli_section, CliSection, CliValues, ConfigError, ConfigResolver, Environment,
    PyprojectToml, CONFIG_FILE_NAME,
};
pub use console::Console;
