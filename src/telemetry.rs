//! Telemetry initialization.
//!
//! Controlled by `RECALC_LOG`:
//! - unset → no-op (no subscriber installed, zero overhead)
//! - `"stderr"` → JSON events to stderr
//! - `"text"` → human-readable events to stderr
//!
//! `RUST_LOG` sets the filter; it defaults to `info`. Replay windows are
//! emitted at `debug`, individual replayed steps at `trace`.

use tracing_subscriber::EnvFilter;

/// Environment variable selecting the telemetry sink.
pub const LOG_ENV: &str = "RECALC_LOG";

/// Where events go, parsed from [`LOG_ENV`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sink {
    /// Tracing disabled.
    Off,
    /// JSON lines on stderr.
    StderrJson,
    /// Human-readable lines on stderr.
    StderrText,
}

impl Sink {
    /// Map a `RECALC_LOG` value to a sink. Unknown values disable tracing.
    #[must_use]
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("stderr") => Self::StderrJson,
            Some("text") => Self::StderrText,
            _ => Self::Off,
        }
    }
}

/// Initialize telemetry based on `RECALC_LOG`.
///
/// Returns the sink that was selected. Unknown values print a warning and
/// fall back to no-op.
pub fn init() -> Sink {
    let value = std::env::var(LOG_ENV).ok();
    let sink = Sink::from_env_value(value.as_deref());

    match sink {
        Sink::Off => {
            if let Some(other) = value.as_deref().filter(|v| !v.is_empty()) {
                eprintln!("warning: {LOG_ENV}={other} not recognised; use 'stderr' or 'text'");
            }
        }
        Sink::StderrJson => init_stderr_json(),
        Sink::StderrText => init_stderr_text(),
    }
    sink
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// JSON events to stderr via tracing-subscriber's JSON formatter.
fn init_stderr_json() {
    use tracing_subscriber::layer::SubscriberExt as _;
    use tracing_subscriber::util::SubscriberInitExt as _;

    tracing_subscriber::registry()
        .with(filter())
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn init_stderr_text() {
    use tracing_subscriber::layer::SubscriberExt as _;
    use tracing_subscriber::util::SubscriberInitExt as _;

    tracing_subscriber::registry()
        .with(filter())
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();
}
