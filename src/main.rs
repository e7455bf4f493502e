use anyhow::Context;
use clap::Parser;
use lesson_exercises::app::commands;
use lesson_exercises::core::catalog::SourceRoot;
use lesson_exercises::core::ConfigProvider;
use lesson_exercises::utils::{logger, validation::Validate};
use lesson_exercises::{
    Catalog, CliConfig, Command, ExerciseRegistry, ExerciseRunner, IoConsole, LessonError,
    TomlSettings,
};
use std::path::Path;

fn load_settings(path: Option<&str>) -> anyhow::Result<TomlSettings> {
    let settings = match path {
        Some(path) => TomlSettings::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path))?,
        None => TomlSettings::default(),
    };
    settings.validate().context("Configuration validation failed")?;
    Ok(settings)
}

fn load_catalog(settings: &TomlSettings) -> lesson_exercises::Result<Catalog> {
    match settings.catalog_path() {
        Some(path) => Catalog::from_file(path),
        None => Catalog::embedded(),
    }
}

fn execute(cli: &CliConfig, settings: &TomlSettings) -> lesson_exercises::Result<()> {
    let mut console = IoConsole::stdio();

    match &cli.command {
        Command::List => commands::list(&load_catalog(settings)?, &mut console),
        Command::Show { id, source } => {
            let sources = source.then(|| match settings.assets_root() {
                Some(dir) => SourceRoot::Dir(Path::new(dir)),
                None => SourceRoot::Embedded,
            });
            commands::show(&load_catalog(settings)?, id, sources, &mut console)
        }
        Command::Run { id } => {
            let runner = ExerciseRunner::new(ExerciseRegistry::standard(settings));
            runner.run(id, &mut console)
        }
    }
}

fn main() {
    let cli = CliConfig::parse();

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // logger is not up yet
            match e.downcast_ref::<LessonError>() {
                Some(lesson_error) => {
                    eprintln!("❌ {}", lesson_error.user_friendly_message());
                    eprintln!("💡 {}", lesson_error.recovery_suggestion());
                    std::process::exit(lesson_error.exit_code().max(1));
                }
                None => {
                    eprintln!("❌ {:#}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    if cli.json_logs {
        logger::init_json_logger(cli.verbose, settings.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, settings.log_level());
    }

    tracing::debug!("CLI config: {:?}", cli);
    tracing::debug!("Settings: {:?}", settings);

    if let Err(e) = execute(&cli, &settings) {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}
