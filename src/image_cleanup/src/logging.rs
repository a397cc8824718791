use crate::config::Config;
use crate::constants::{DEFAULT_LOG_LEVEL, SYSLOG_IDENTIFIER};
use std::io::{self, IsTerminal};
use std::str::FromStr;
use tracing::level_filters::LevelFilter;
use tracing::Dispatch;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Outcome of picking the journal sink. `error` is set when the journal was
/// wanted but could not be reached.
struct JournalSink {
    layer: Option<tracing_journald::Layer>,
    error: Option<io::Error>,
}

/// Builds the dispatcher every log line of a run goes through. Nothing is
/// installed here; the caller decides where the dispatcher applies.
pub fn setup_logging(config: &Config) -> Dispatch {
    let journal = journal_sink(config, || {
        tracing_journald::layer()
            .map(|layer| layer.with_syslog_identifier(SYSLOG_IDENTIFIER.to_string()))
    });

    build_dispatch(
        config,
        journal,
        std::io::stderr,
        std::io::stderr().is_terminal(),
    )
}

/// Only calls `connect` when the configuration asks for the journal.
fn journal_sink<F>(config: &Config, connect: F) -> JournalSink
where
    F: FnOnce() -> io::Result<tracing_journald::Layer>,
{
    if !config.use_journald() {
        return JournalSink {
            layer: None,
            error: None,
        };
    }

    match connect() {
        Ok(layer) => JournalSink {
            layer: Some(layer),
            error: None,
        },
        Err(e) => JournalSink {
            layer: None,
            error: Some(e),
        },
    }
}

/// The formatted layer on `writer` is used whenever the journal isn't.
fn build_dispatch<W>(config: &Config, journal: JournalSink, writer: W, ansi: bool) -> Dispatch
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (filter, rejected_level) = level_filter(&config.log_level);
    let on_journal = journal.layer.is_some();

    let text_layer = (!on_journal).then(|| {
        fmt::layer()
            .with_writer(writer)
            .with_ansi(ansi)
            .with_target(false)
            .with_level(true)
    });

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(journal.layer)
        .with(text_layer);
    let dispatch = Dispatch::new(subscriber);

    tracing::dispatcher::with_default(&dispatch, || {
        if let Some(level) = rejected_level {
            tracing::warn!(
                "Unrecognised log level {:?}, using {}",
                level,
                DEFAULT_LOG_LEVEL
            );
        }
        if let Some(e) = journal.error {
            tracing::warn!(
                "Unable to reach the systemd journal ({}). Falling back to stderr logging.",
                e
            );
        }
        if on_journal {
            tracing::debug!("Logging to the systemd journal as {}", SYSLOG_IDENTIFIER);
        }
    });

    dispatch
}

/// Maps the level names operators tend to use onto `tracing` levels.
fn normalize_level(raw: &str) -> String {
    match raw.trim().to_ascii_lowercase().as_str() {
        "warning" => "warn".to_string(),
        "critical" | "fatal" => "error".to_string(),
        "notset" => "trace".to_string(),
        other => other.to_string(),
    }
}

/// Accepts a plain level name or a full filter directive
/// (`image_cleanup=debug,bollard=warn`). Anything else falls back to the
/// default level and is handed back so it can be reported.
fn level_filter(raw: &str) -> (EnvFilter, Option<String>) {
    let normalized = normalize_level(raw);

    let parsed = if normalized.contains('=') || normalized.contains(',') {
        EnvFilter::try_new(&normalized).ok()
    } else {
        LevelFilter::from_str(&normalized)
            .ok()
            .map(|level| EnvFilter::default().add_directive(level.into()))
    };

    match parsed {
        Some(filter) => (filter, None),
        None => (EnvFilter::new(DEFAULT_LOG_LEVEL), Some(raw.to_string())),
    }
}

/// In-memory log destination for tests that assert on formatted output.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct LogBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

#[cfg(test)]
impl LogBuffer {
    pub(crate) fn contents(&self) -> String {
        let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

#[cfg(test)]
impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
