//! Logging for the workshop shell.
//!
//! Records go to stderr so they never interleave with the views the shell
//! prints on stdout. The level can be changed from the prompt with
//! `log <level>`.

use std::{
    fs::File,
    io::{self, IsTerminal},
    path::Path,
    sync::{Mutex, OnceLock},
};

use anyhow::{Context, Result};
use tracing_subscriber::{
    EnvFilter, Registry,
    fmt::{self, time::ChronoLocal},
    layer::SubscriberExt,
    reload,
    util::SubscriberInitExt,
};

const TIME_FORMAT: &str = "%H:%M:%S%.3f";

static LEVEL: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();

/// Where log records go and how many of them.
#[derive(Debug, Clone, Copy)]
pub struct LogOptions<'a> {
    /// Bare level or EnvFilter directive; `RUST_LOG` wins over it.
    pub level: &'a str,
    /// Drop console records. A log file still receives everything.
    pub quiet: bool,
    /// Appended to, never truncated.
    pub file: Option<&'a Path>,
}

/// `RUST_LOG` wins; otherwise `level`, falling back to `info` if it does
/// not parse.
fn make_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber. Only the first call has any effect.
pub fn init_logging(options: LogOptions<'_>) -> Result<()> {
    let file = options
        .file
        .map(|path| {
            File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file '{}'", path.display()))
        })
        .transpose()?;

    let (filter, handle) = reload::Layer::new(make_filter(options.level));

    let console = (!options.quiet).then(|| {
        fmt::layer()
            .with_timer(ChronoLocal::new(TIME_FORMAT.to_string()))
            .with_target(false)
            .with_ansi(io::stderr().is_terminal())
            .with_writer(io::stderr)
    });
    let file = file.map(|file| {
        fmt::layer()
            .with_timer(ChronoLocal::rfc_3339())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
    });

    if tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init()
        .is_ok()
    {
        let _ = LEVEL.set(handle);
    }
    Ok(())
}

/// Replaces the active filter. Accepts a bare level ("warn", "debug") or
/// any EnvFilter directive such as `workshop_core=trace`.
pub fn set_log_level(level: &str) -> Result<()> {
    let handle = LEVEL.get().context("logging not initialized")?;
    let filter =
        EnvFilter::try_new(level).with_context(|| format!("invalid log level '{level}'"))?;
    handle.reload(filter).context("cannot apply log level")
}
