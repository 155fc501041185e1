use std::io::Write;
use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::cli_types::ConfigAction;
use crate::settings::{
    DbPathSource, resolve_database_path, save_database_path, settings_path,
};

pub(crate) fn run_config(
    action: ConfigAction,
    cli_db: Option<PathBuf>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let settings = settings_path();
    match action {
        ConfigAction::Show => {
            let (db_path, source) = resolve_database_path(cli_db);
            print_config(&settings, &db_path, source, out)?;
        }
        ConfigAction::Path => {
            writeln!(out, "{}", settings.display())?;
        }
        ConfigAction::SetDb { path } => {
            if !path.exists() {
                log::warn!("{} does not exist yet", path.display());
            }
            save_database_path(&settings, Some(path.as_path()))?;
            writeln!(out, "Saved database path: {}", path.display())?;
        }
        ConfigAction::UnsetDb => {
            save_database_path(&settings, None)?;
            writeln!(out, "Cleared saved database path")?;
        }
    }
    Ok(())
}

pub(crate) fn print_config(
    settings: &Path,
    db_path: &Path,
    source: DbPathSource,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    writeln!(
        out,
        "{}",
        "MovieLens Configuration".if_supports_color(Stdout, |t| t.bold())
    )?;
    writeln!(
        out,
        "  Settings file: {} {}",
        settings.display(),
        if settings.exists() { "(exists)" } else { "(not found)" },
    )?;
    writeln!(
        out,
        "  Database:      {} ({}){}",
        db_path.display(),
        source,
        if db_path.exists() { "" } else { " [missing]" },
    )?;
    Ok(())
}
