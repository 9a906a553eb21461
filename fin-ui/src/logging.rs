//! Process-wide `tracing` setup.
//!
//! Events go to stderr so they never interleave with frames on stdout. The
//! filter can be swapped at runtime and a log file attached after startup,
//! once the config has said where it lives.

use std::{
    fs::File,
    io::{self, IsTerminal},
    path::Path,
    sync::{Arc, Mutex, OnceLock, PoisonError},
};

use anyhow::{Context, Result};
use chrono::Local;
use tracing_subscriber::{
    EnvFilter, Registry,
    fmt::{
        MakeWriter,
        format::Writer,
        time::FormatTime,
        writer::OptionalWriter,
    },
    layer::SubscriberExt,
    reload,
    util::SubscriberInitExt,
};

/// Filter used when neither `RUST_LOG` nor the config sets one. Rendered
/// frames share the terminal with stderr, so routine events stay hidden.
pub const DEFAULT_FILTER: &str = "warn";

/// Local wall-clock timestamps with the UTC offset.
struct LocalClock;

impl FormatTime for LocalClock {
    fn format_time(
        &self,
        w: &mut Writer<'_>,
    ) -> std::fmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z"))
    }
}

/// Log file that can be attached after the subscriber is installed. Events
/// are dropped while it is empty.
#[derive(Clone, Default)]
struct FileSlot(Arc<Mutex<Option<File>>>);

impl FileSlot {
    fn attach(
        &self,
        file: File,
    ) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = Some(file);
    }
}

impl<'a> MakeWriter<'a> for FileSlot {
    type Writer = OptionalWriter<File>;

    fn make_writer(&'a self) -> Self::Writer {
        let slot = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        slot.as_ref().and_then(|file| file.try_clone().ok()).into()
    }
}

struct LogControl {
    filter: reload::Handle<EnvFilter, Registry>,
    file: FileSlot,
}

static CONTROL: OnceLock<LogControl> = OnceLock::new();

fn control() -> Result<&'static LogControl> {
    CONTROL.get().context("logging not yet initialized")
}

/// Level to apply on top of the startup filter.
///
/// A command-line level always wins. A level from the config file applies
/// only when `RUST_LOG` is unset, so the environment can still override a
/// checked-in config.
pub fn effective_level<'a>(
    flag: Option<&'a str>,
    config: Option<&'a str>,
    rust_log: Option<&str>,
) -> Option<&'a str> {
    flag.or(config.filter(|_| rust_log.is_none_or(|v| v.trim().is_empty())))
}

/// Changes the active log filter at runtime.
/// Accepts a bare level ("error", "warn", "info", "debug", "trace")
/// or any full EnvFilter directive.
pub fn set_log_level(level: &str) -> Result<()> {
    let filter =
        EnvFilter::try_new(level).with_context(|| format!("invalid log level '{level}'"))?;
    control()?
        .filter
        .reload(filter)
        .context("filter reload failed")
}

/// Starts appending log output to `path`, replacing any file already open.
/// The directory must already exist.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))?;
    control()?.file.attach(file);
    Ok(())
}

/// Installs the global subscriber. Later calls are no-ops.
///
/// The startup filter is `RUST_LOG` when set, else [`DEFAULT_FILTER`].
pub fn init_default_logging() {
    CONTROL.get_or_init(|| {
        let startup = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let (filter, handle) = reload::Layer::new(startup);
        let file = FileSlot::default();

        let stderr_layer = tracing_subscriber::fmt::layer()
            .with_timer(LocalClock)
            .with_ansi(io::stderr().is_terminal())
            .with_writer(io::stderr);
        let file_layer = tracing_subscriber::fmt::layer()
            .with_timer(LocalClock)
            .with_ansi(false)
            .with_writer(file.clone());

        // Fails only when another subscriber is already global; the handle
        // then reports the dropped filter on reload.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .with(file_layer)
            .try_init();
        LogControl {
            filter: handle,
            file,
        }
    });
}
