//! crates/logging/src/tracing_bridge.rs
//! Bridge from the `tracing` crate into the console logger.
//!
//! [`WillogLayer`] is a `tracing-subscriber` layer that turns each event into
//! one log line. The tracing level picks the [`Severity`], the event's
//! `message` field becomes the text and the event metadata supplies the call
//! site. Events still pass through the logger's threshold, so the process-wide
//! [`set_level`](crate::set_level) also filters tracing output.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::init_tracing;
//!
//! init_tracing();
//! tracing::warn!("cache miss for {}", key);
//! ```

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use super::call_site::CallSite;
use super::global;
use super::logger::Logger;
use super::severity::Severity;

const UNKNOWN_FILE: &str = "<unknown>";

/// A tracing layer that writes events through the console logger.
///
/// By default events go to the process-wide logger on standard output. A layer
/// built with [`WillogLayer::with_logger`] writes into a shared [`Logger`]
/// instead.
pub struct WillogLayer<W = io::Stdout> {
    logger: Option<Arc<Mutex<Logger<W>>>>,
}

impl WillogLayer {
    /// Creates a layer that forwards to the process-wide logger.
    #[must_use]
    pub const fn new() -> Self {
        Self { logger: None }
    }
}

impl Default for WillogLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> WillogLayer<W> {
    /// Creates a layer that forwards to `logger`.
    #[must_use]
    pub const fn with_logger(logger: Arc<Mutex<Logger<W>>>) -> Self {
        Self {
            logger: Some(logger),
        }
    }

    /// Maps a tracing level to a severity.
    const fn severity_for(level: &Level) -> Severity {
        match *level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warn,
            Level::INFO => Severity::Info,
            Level::DEBUG => Severity::Debug,
            Level::TRACE => Severity::Trace,
        }
    }

    /// Builds a call site from event metadata.
    ///
    /// Tracing records no function name, so the last segment of the module
    /// path stands in for it.
    fn call_site_for(metadata: &tracing::Metadata<'static>) -> CallSite {
        let function = metadata
            .module_path()
            .map_or(metadata.target(), |path| {
                path.rsplit("::").next().unwrap_or(path)
            });
        CallSite::from_parts(
            metadata.file().unwrap_or(UNKNOWN_FILE),
            function,
            metadata.line().unwrap_or(0),
        )
    }
}

impl<S, W> Layer<S> for WillogLayer<W>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: Write + Send + 'static,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let severity = Self::severity_for(metadata.level());

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let Some(message) = visitor.message else {
            return;
        };
        let site = Self::call_site_for(metadata);

        // The message is passed as an argument so a literal '%' in it is
        // never read as a placeholder.
        let _ = match &self.logger {
            Some(logger) => logger
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .log(severity, &site, "%s", &[&message]),
            None => global::log(severity, &site, "%s", &[&message]),
        };
    }
}

/// Visitor to extract the message from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a global subscriber that writes tracing events through the
/// process-wide console logger.
///
/// Calls [`init`](crate::init) first. Panics if a global subscriber has
/// already been set, like `tracing_subscriber`'s own `init`.
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    global::init();
    tracing_subscriber::registry().with(WillogLayer::new()).init();
}

/// Installs a global subscriber that applies `filter` before the console
/// logger sees an event.
///
/// # Example
///
/// ```rust,ignore
/// use logging::init_tracing_with_filter;
/// use tracing_subscriber::filter::LevelFilter;
///
/// init_tracing_with_filter(LevelFilter::INFO);
/// ```
pub fn init_tracing_with_filter<F>(filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    global::init();
    tracing_subscriber::registry()
        .with(filter)
        .with(WillogLayer::new())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogConfig;
    use tracing_subscriber::layer::SubscriberExt;

    fn capture(config: LogConfig, body: impl FnOnce()) -> String {
        let logger = Arc::new(Mutex::new(Logger::plain(Vec::new(), config)));
        let subscriber =
            tracing_subscriber::registry().with(WillogLayer::with_logger(Arc::clone(&logger)));
        tracing::subscriber::with_default(subscriber, body);

        let logger = Arc::try_unwrap(logger)
            .ok()
            .expect("subscriber dropped")
            .into_inner()
            .expect("not poisoned");
        String::from_utf8(logger.into_inner()).expect("utf-8")
    }

    #[test]
    fn levels_map_to_severities() {
        assert_eq!(WillogLayer::<Vec<u8>>::severity_for(&Level::ERROR), Severity::Error);
        assert_eq!(WillogLayer::<Vec<u8>>::severity_for(&Level::WARN), Severity::Warn);
        assert_eq!(WillogLayer::<Vec<u8>>::severity_for(&Level::INFO), Severity::Info);
        assert_eq!(WillogLayer::<Vec<u8>>::severity_for(&Level::DEBUG), Severity::Debug);
        assert_eq!(WillogLayer::<Vec<u8>>::severity_for(&Level::TRACE), Severity::Trace);
    }

    #[test]
    fn events_become_log_lines() {
        let text = capture(LogConfig::plain(Severity::All), || {
            tracing::warn!("low disk: {}%", 7);
            tracing::info!(user = "alice", "logged in");
        });
        assert_eq!(text, "[WARN] low disk: 7%\n[INFO] logged in\n");
    }

    #[test]
    fn threshold_applies_to_events() {
        let text = capture(LogConfig::plain(Severity::Warn), || {
            tracing::error!("kept");
            tracing::debug!("dropped");
        });
        assert_eq!(text, "[ERROR] kept\n");
    }

    #[test]
    fn call_site_comes_from_metadata() {
        let mut config = LogConfig::plain(Severity::All);
        config.show_file_name();
        config.show_function();
        let text = capture(config, || tracing::info!("here"));
        assert_eq!(text, "[tracing_bridge.rs] [tests] [INFO] here\n");
    }

    #[test]
    fn events_without_message_are_skipped() {
        let text = capture(LogConfig::plain(Severity::All), || {
            tracing::info!(count = 3);
        });
        assert!(text.is_empty());
    }
}
