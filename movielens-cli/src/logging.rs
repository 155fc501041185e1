//! Logger setup for the `log` facade.
//!
//! Command output goes to stdout directly; the logger only carries
//! diagnostics and always writes to stderr.

use std::io::Write;

use log::LevelFilter;

/// Install the global logger. `RUST_LOG`, when set, overrides the level
/// chosen from the flags.
pub(crate) fn init_logging(quiet: bool, verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_for(quiet, verbose));
    builder.parse_default_env();
    builder.target(env_logger::Target::Stderr);

    if verbose {
        builder.format_timestamp_millis().format_target(true);
    } else {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "{}: {}",
                record.level().as_str().to_lowercase(),
                record.args()
            )
        });
    }

    // A second call (e.g. from tests) keeps the first logger
    let _ = builder.try_init();
}

fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Warn
    }
}
