pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::config::toml_config::TomlSettings;
pub use crate::core::{
    catalog::Catalog,
    console::IoConsole,
    runner::{ExerciseRegistry, ExerciseRunner},
};
pub use crate::utils::error::{LessonError, Result};
