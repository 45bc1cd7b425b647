//! Settings resolution: CLI flag > environment > config file > default.
//!
//! The config file lives at `~/.config/ricettiva/config.toml`:
//!
//! ```toml
//! database = "/srv/ricettiva/ricettiva.db"
//! skipped = "/srv/ricettiva/skipped.jsonl"
//! reference_dir = "/srv/ricettiva/reference"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::CliError;

pub(crate) const DB_ENV: &str = "RICETTIVA_DB";
pub(crate) const SKIPPED_ENV: &str = "RICETTIVA_SKIPPED";
pub(crate) const REFERENCE_ENV: &str = "RICETTIVA_REFERENCE";

const DEFAULT_DB: &str = "ricettiva.db";
const DEFAULT_SKIPPED: &str = "skipped_records.jsonl";

/// TOML config file format.
#[derive(Debug, Default, Deserialize, Serialize)]
pub(crate) struct ConfigFile {
    pub database: Option<PathBuf>,
    pub skipped: Option<PathBuf>,
    pub reference_dir: Option<PathBuf>,
}

/// Where a setting's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
    Flag,
    EnvVar(&'static str),
    ConfigFile,
    Default,
}

impl std::fmt::Display for SettingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "command line"),
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Setting {
    pub value: PathBuf,
    pub source: SettingSource,
}

/// Resolved settings for one invocation.
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub db: Setting,
    pub skipped: Setting,
    pub reference_dir: Option<Setting>,
}

/// Canonical path to the config file.
pub(crate) fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("ricettiva").join("config.toml"))
}

/// Read the config file. A missing file is not an error.
pub(crate) fn load_config_file(path: &Path) -> Result<Option<ConfigFile>, CliError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)?;
    toml::from_str(&contents)
        .map(Some)
        .map_err(|e| CliError::config(format!("{}: {}", path.display(), e)))
}

fn pick(
    flag: Option<PathBuf>,
    env_var: &'static str,
    env: &dyn Fn(&str) -> Option<String>,
    from_file: Option<PathBuf>,
) -> Option<Setting> {
    let setting = |value, source| Setting { value, source };
    flag.map(|v| setting(v, SettingSource::Flag))
        .or_else(|| {
            env(env_var)
                .filter(|v| !v.is_empty())
                .map(|v| setting(PathBuf::from(v), SettingSource::EnvVar(env_var)))
        })
        .or_else(|| from_file.map(|v| setting(v, SettingSource::ConfigFile)))
}

impl Settings {
    /// Resolve from the real environment and config file.
    pub(crate) fn load(db_flag: Option<PathBuf>) -> Result<Self, CliError> {
        let file = match config_path() {
            Some(path) => load_config_file(&path)?,
            None => None,
        };
        Ok(Self::resolve(db_flag, &|var: &str| std::env::var(var).ok(), file))
    }

    pub(crate) fn resolve(
        db_flag: Option<PathBuf>,
        env: &dyn Fn(&str) -> Option<String>,
        file: Option<ConfigFile>,
    ) -> Self {
        let file = file.unwrap_or_default();
        let db = pick(db_flag, DB_ENV, env, file.database).unwrap_or_else(|| Setting {
            value: PathBuf::from(DEFAULT_DB),
            source: SettingSource::Default,
        });
        let skipped = pick(None, SKIPPED_ENV, env, file.skipped).unwrap_or_else(|| Setting {
            value: PathBuf::from(DEFAULT_SKIPPED),
            source: SettingSource::Default,
        });
        let reference_dir = pick(None, REFERENCE_ENV, env, file.reference_dir);
        Self {
            db,
            skipped,
            reference_dir,
        }
    }

    /// The skipped-records file for an import, honouring a per-command flag.
    pub(crate) fn skipped_path(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.unwrap_or_else(|| self.skipped.value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let settings = Settings::resolve(None, &no_env, None);
        assert_eq!(settings.db.value, PathBuf::from("ricettiva.db"));
        assert_eq!(settings.db.source, SettingSource::Default);
        assert_eq!(settings.skipped.value, PathBuf::from("skipped_records.jsonl"));
        assert!(settings.reference_dir.is_none());
    }

    #[test]
    fn flag_beats_env_beats_file() {
        let file = || ConfigFile {
            database: Some(PathBuf::from("file.db")),
            skipped: Some(PathBuf::from("file.jsonl")),
            reference_dir: Some(PathBuf::from("ref")),
        };
        let env = |var: &str| match var {
            DB_ENV => Some("env.db".to_string()),
            _ => None,
        };

        let settings = Settings::resolve(Some(PathBuf::from("flag.db")), &env, Some(file()));
        assert_eq!(settings.db.value, PathBuf::from("flag.db"));
        assert_eq!(settings.db.source, SettingSource::Flag);

        let settings = Settings::resolve(None, &env, Some(file()));
        assert_eq!(settings.db.value, PathBuf::from("env.db"));
        assert_eq!(settings.db.source, SettingSource::EnvVar(DB_ENV));
        assert_eq!(settings.skipped.source, SettingSource::ConfigFile);
        assert_eq!(
            settings.reference_dir.map(|s| s.value),
            Some(PathBuf::from("ref"))
        );
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let env = |_: &str| Some(String::new());
        let settings = Settings::resolve(None, &env, None);
        assert_eq!(settings.db.source, SettingSource::Default);
    }

    #[test]
    fn skipped_flag_overrides() {
        let settings = Settings::resolve(None, &no_env, None);
        assert_eq!(
            settings.skipped_path(Some(PathBuf::from("mine.jsonl"))),
            PathBuf::from("mine.jsonl")
        );
        assert_eq!(settings.skipped_path(None), PathBuf::from("skipped_records.jsonl"));
    }

    #[test]
    fn config_file_parses() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "database = \"/tmp/x.db\"\n").unwrap();
        let file = load_config_file(&path).unwrap().unwrap();
        assert_eq!(file.database, Some(PathBuf::from("/tmp/x.db")));
        assert!(file.skipped.is_none());

        std::fs::write(&path, "database = [").unwrap();
        assert!(matches!(load_config_file(&path), Err(CliError::Config(_))));

        assert!(load_config_file(&dir.path().join("none.toml")).unwrap().is_none());
    }
}
