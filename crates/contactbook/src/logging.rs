//! Logging configuration for contactbook.
//!
//! Diagnostics go to stderr so they never interleave with the interactive
//! transcript on stdout.

use tracing::{Level, Subscriber};
use tracing_subscriber::{fmt, fmt::MakeWriter, prelude::*, EnvFilter};

/// Verbosity level for logging output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Only errors.
    Quiet,
    /// Info and above.
    #[default]
    Normal,
    /// Debug and above.
    Verbose,
    /// Everything.
    Trace,
}

impl Verbosity {
    /// Convert verbosity to tracing level filter.
    #[must_use]
    pub fn to_level_filter(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Filter directive covering this crate's events at this verbosity.
    #[must_use]
    pub fn directive(&self) -> String {
        format!("contactbook={}", self.to_level_filter())
    }
}

/// Build the event filter.
///
/// A non-blank `rust_log` that parses as a filter wins; otherwise the
/// verbosity decides.
fn env_filter(verbosity: Verbosity, rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(verbosity.directive()))
}

/// Assemble the subscriber, writing formatted events to `writer`.
fn subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(writer)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false),
    )
}

/// Initialize the logging system.
///
/// This should be called once at application startup. The logging level can be
/// controlled via:
/// 1. The `verbosity` parameter
/// 2. The `RUST_LOG` environment variable (takes precedence)
///
/// # Examples
///
/// ```no_run
/// use contactbook::{init_logging, logging::Verbosity};
///
/// init_logging(Verbosity::Verbose);
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = env_filter(verbosity, rust_log.as_deref());

    // Ignore the error if a subscriber is already installed
    let _ = subscriber(filter, std::io::stderr).try_init();
}

/// Initialize logging for tests.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Emit one event per level from this crate and one from another target.
    fn capture(verbosity: Verbosity, rust_log: Option<&str>) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = subscriber(env_filter(verbosity, rust_log), move || writer.clone());

        tracing::subscriber::with_default(subscriber, || {
            tracing::error!(target: "contactbook::session", "error-event");
            tracing::info!(target: "contactbook::session", "info-event");
            tracing::debug!(target: "contactbook::contact_list", "debug-event");
            tracing::trace!(target: "contactbook::contact_list", "trace-event");
            tracing::info!(target: "other_crate", "foreign-event");
        });
        captured.contents()
    }

    #[test]
    fn test_verbosity_to_level() {
        assert_eq!(Verbosity::Quiet.to_level_filter(), Level::ERROR);
        assert_eq!(Verbosity::Normal.to_level_filter(), Level::INFO);
        assert_eq!(Verbosity::Verbose.to_level_filter(), Level::DEBUG);
        assert_eq!(Verbosity::Trace.to_level_filter(), Level::TRACE);
    }

    #[test]
    fn test_verbosity_default() {
        assert_eq!(Verbosity::default(), Verbosity::Normal);
    }

    #[test]
    fn test_directive() {
        assert_eq!(Verbosity::Verbose.directive(), "contactbook=DEBUG");
    }

    #[test]
    fn test_quiet_keeps_only_errors() {
        let out = capture(Verbosity::Quiet, None);
        assert!(out.contains("error-event"));
        assert!(!out.contains("info-event"));
    }

    #[test]
    fn test_verbose_includes_debug_but_not_trace() {
        let out = capture(Verbosity::Verbose, None);
        assert!(out.contains("info-event"));
        assert!(out.contains("debug-event"));
        assert!(!out.contains("trace-event"));
    }

    #[test]
    fn test_other_targets_are_filtered_by_default() {
        let out = capture(Verbosity::Trace, None);
        assert!(out.contains("trace-event"));
        assert!(!out.contains("foreign-event"));
    }

    #[test]
    fn test_rust_log_overrides_verbosity() {
        let out = capture(Verbosity::Quiet, Some("contactbook=trace,other_crate=info"));
        assert!(out.contains("trace-event"));
        assert!(out.contains("foreign-event"));
    }

    #[test]
    fn test_blank_rust_log_falls_back_to_verbosity() {
        let out = capture(Verbosity::Normal, Some("  "));
        assert!(out.contains("info-event"));
        assert!(!out.contains("debug-event"));
    }

    #[test]
    fn test_invalid_rust_log_falls_back_to_verbosity() {
        let out = capture(Verbosity::Verbose, Some("contactbook=loud"));
        assert!(out.contains("debug-event"));
        assert!(!out.contains("trace-event"));
    }

    #[test]
    fn test_init_logging_with_all_verbosity_levels() {
        // Only the first call installs a subscriber; the rest must not panic.
        init_logging(Verbosity::Quiet);
        init_logging(Verbosity::Normal);
        init_logging(Verbosity::Verbose);
        init_logging(Verbosity::Trace);
    }

    #[test]
    fn test_init_test_logging_does_not_panic() {
        init_test_logging();
    }
}
