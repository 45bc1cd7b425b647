pub(crate) mod config;
pub(crate) mod import;
pub(crate) mod purge;
pub(crate) mod seed;
pub(crate) mod stats;

use std::io::{self, BufRead, Write};
use std::path::Path;

use ricettiva_catalog::ReferenceData;
use rusqlite::Connection;

use crate::CliError;
use crate::config::Settings;

/// Open (or create) the document store.
pub(crate) fn open_store(path: &Path) -> Result<Connection, CliError> {
    let conn = ricettiva_db::open_database(path)
        .map_err(|e| CliError::database(format!("Failed to open {}: {}", path.display(), e)))?;
    log::debug!("Opened document store at {}", path.display());
    Ok(conn)
}

/// Reference data from the configured directory, or the built-in tables.
pub(crate) fn reference_data(settings: &Settings) -> Result<ReferenceData, CliError> {
    match &settings.reference_dir {
        Some(dir) => {
            log::debug!("Loading reference data from {}", dir.value.display());
            Ok(ricettiva_catalog::load_reference(&dir.value)?)
        }
        None => Ok(ReferenceData::default()),
    }
}

/// Print `prompt` and read one trimmed line from `input`.
pub(crate) fn ask(prompt: &str, input: &mut dyn BufRead) -> Result<String, CliError> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// A y/yes answer, case-insensitive. Anything else declines.
pub(crate) fn is_yes(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_answers() {
        assert!(is_yes("y"));
        assert!(is_yes("YES"));
        assert!(!is_yes(""));
        assert!(!is_yes("no"));
        assert!(!is_yes("yep"));
    }

    #[test]
    fn ask_trims_the_line() {
        let mut input = io::Cursor::new("  yes \n");
        assert_eq!(ask("? ", &mut input).unwrap(), "yes");
    }
}
