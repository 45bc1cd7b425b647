use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::config::{Setting, Settings, config_path};

fn show_setting(name: &str, setting: Option<&Setting>) {
    match setting {
        Some(s) => log::info!(
            "  {:<14} {} {}",
            name,
            s.value.display().if_supports_color(Stdout, |t| t.cyan()),
            format!("({})", s.source).if_supports_color(Stdout, |t| t.dimmed()),
        ),
        None => log::info!(
            "  {:<14} {}",
            name,
            "(not set, using built-in tables)".if_supports_color(Stdout, |t| t.dimmed()),
        ),
    }
}

/// Show resolved settings and their sources.
pub(crate) fn run_config_show(settings: &Settings) -> Result<(), CliError> {
    log::info!(
        "{}",
        "ricettiva Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    match config_path() {
        Some(p) if p.exists() => log::info!(
            "  Config file: {} {}",
            p.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        ),
        Some(p) => log::info!(
            "  Config file: {} {}",
            p.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        ),
        None => log::info!(
            "  Config file: {}",
            "could not determine path".if_supports_color(Stdout, |t| t.red()),
        ),
    }
    crate::log_blank();

    show_setting("database", Some(&settings.db));
    show_setting("skipped", Some(&settings.skipped));
    show_setting("reference_dir", settings.reference_dir.as_ref());
    Ok(())
}

/// Print the config file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    let path = config_path().ok_or_else(|| CliError::config("Could not determine config directory"))?;
    log::info!("{}", path.display());
    Ok(())
}
