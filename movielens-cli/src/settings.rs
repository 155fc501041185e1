//! Database path resolution and the settings file.
//!
//! Settings live in `~/.config/movielens/settings.toml`:
//!
//! ```toml
//! [database]
//! path = "/data/MovieLens.db"
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::CliError;

/// Environment variable that overrides the saved database path.
pub(crate) const DB_ENV_VAR: &str = "MOVIELENS_DB";

/// Database file used when nothing else is configured.
pub(crate) const DEFAULT_DB_FILE: &str = "MovieLens.db";

/// Where the resolved database path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DbPathSource {
    CliFlag,
    EnvVar,
    SettingsFile,
    Default,
}

impl fmt::Display for DbPathSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CliFlag => write!(f, "--db flag"),
            Self::EnvVar => write!(f, "env ${}", DB_ENV_VAR),
            Self::SettingsFile => write!(f, "settings file"),
            Self::Default => write!(f, "default"),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    database: DatabaseSettings,
}

#[derive(Debug, Default, Deserialize)]
struct DatabaseSettings {
    path: Option<PathBuf>,
}

/// Canonical path to the settings file: `~/.config/movielens/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("movielens").join("settings.toml")
}

/// Resolve the database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `$MOVIELENS_DB`
/// 3. Saved `database.path` in `settings.toml`
/// 4. `MovieLens.db` in the current directory
pub(crate) fn resolve_database_path(cli_override: Option<PathBuf>) -> (PathBuf, DbPathSource) {
    let env = std::env::var_os(DB_ENV_VAR).map(PathBuf::from);
    resolve_from(cli_override, env, &settings_path())
}

pub(crate) fn resolve_from(
    cli_override: Option<PathBuf>,
    env: Option<PathBuf>,
    settings_file: &Path,
) -> (PathBuf, DbPathSource) {
    if let Some(p) = cli_override {
        return (p, DbPathSource::CliFlag);
    }
    if let Some(p) = env.filter(|p| !p.as_os_str().is_empty()) {
        return (p, DbPathSource::EnvVar);
    }
    if let Some(p) = load_database_path(settings_file) {
        return (p, DbPathSource::SettingsFile);
    }
    (PathBuf::from(DEFAULT_DB_FILE), DbPathSource::Default)
}

/// Read `database.path` from a settings file, if set.
///
/// An unreadable or malformed file is treated as unset.
pub(crate) fn load_database_path(settings_file: &Path) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings_file).ok()?;
    let settings: SettingsFile = match toml::from_str(&contents) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("Ignoring malformed {}: {}", settings_file.display(), e);
            return None;
        }
    };
    settings
        .database
        .path
        .filter(|p| !p.as_os_str().is_empty())
}

/// Save (or clear) the database path in a settings file.
///
/// Other sections and keys in the file are left as they were.
pub(crate) fn save_database_path(settings_file: &Path, path: Option<&Path>) -> Result<(), CliError> {
    let mut doc = read_settings_table(settings_file)?;

    let database = match doc
        .entry("database")
        .or_insert(toml::Value::Table(toml::Table::new()))
    {
        toml::Value::Table(t) => t,
        _ => return Err(CliError::config("[database] is not a table")),
    };
    match path {
        Some(p) => database.insert(
            "path".to_string(),
            toml::Value::String(p.to_string_lossy().into_owned()),
        ),
        None => database.remove("path"),
    };

    let serialized = toml::to_string_pretty(&doc)
        .map_err(|e| CliError::config(format!("Failed to serialize settings: {}", e)))?;
    replace_file(settings_file, &serialized)
}

/// Parse a settings file as a TOML table. A missing file is an empty table.
fn read_settings_table(settings_file: &Path) -> Result<toml::Table, CliError> {
    match std::fs::read_to_string(settings_file) {
        Ok(contents) => contents.parse::<toml::Table>().map_err(|e| {
            CliError::config(format!("{} is not valid TOML: {}", settings_file.display(), e))
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(toml::Table::new()),
        Err(e) => Err(e.into()),
    }
}

/// Write `contents` next to `target` and rename it into place.
fn replace_file(target: &Path, contents: &str) -> Result<(), CliError> {
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let staged = target.with_extension("toml.tmp");
    std::fs::write(&staged, contents)?;
    std::fs::rename(&staged, target)?;
    log::debug!("Wrote {}", target.display());
    Ok(())
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
