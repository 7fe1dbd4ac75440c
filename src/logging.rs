use std::fs::File;
use std::path::Path;

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

use crate::error::{Error, Result};

/// Initializes the global logger.
///
/// `RUST_LOG` always wins. Without it, `verbose` selects debug output; a
/// log file gets info and above; plain stderr only gets warnings, since the
/// game owns the terminal while it runs.
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = match (verbose, log_file) {
        (true, _) => LevelFilter::Debug,
        (false, Some(_)) => LevelFilter::Info,
        (false, None) => LevelFilter::Warn,
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);

    if let Some(path) = log_file {
        let file = File::create(path).map_err(|source| Error::Logger {
            path: path.display().to_string(),
            source,
        })?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    // `try_init` only fails if a logger was already set; a second `init`
    // keeps the first logger.
    let _ = builder.try_init();
    Ok(())
}
