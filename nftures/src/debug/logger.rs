//! File-based logging initialization

use crate::config::AppConfig;
use std::fs;
use tracing::Subscriber;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE_PREFIX: &str = "nftures.log";
const FALLBACK_FILTER: &str = "nftures=info,warn";

/// Initialize the logging system
///
/// Sets up:
/// - Daily rotating log file `nftures.log` under `config.log_dir`
/// - Compact stderr output
/// - Non-blocking file writes so the UI thread never waits on disk
/// - Panic hook that logs the panic location and message
///
/// Falls back to stderr only when the log directory cannot be created.
pub fn init(config: &AppConfig) {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER));

    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer())
            .try_init();
        setup_panic_hook();
        return;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer())
        .try_init()
        .is_err()
    {
        eprintln!("Warning: Global tracing subscriber already set");
        return;
    }

    tracing::info!(
        log_dir = %config.log_dir.display(),
        log_level = %config.log_level,
        "Logging initialized"
    );

    setup_panic_hook();

    // The writer must outlive every log call
    std::mem::forget(guard);
}

/// Compact stderr output, built per subscriber stack
fn stderr_layer<S>() -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
}

/// Set up panic hook to log panics with location
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(
            location = %location,
            message = %message,
            "Application panic"
        );

        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(backtrace = %backtrace, "Panic backtrace");

        default_panic(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_log_dir_and_tolerates_repeat_calls() {
        let log_dir = std::env::temp_dir().join(format!("nftures-logger-{}", std::process::id()));
        let config = AppConfig {
            log_dir: log_dir.clone(),
            ..AppConfig::default()
        };

        init(&config);
        init(&config);

        assert!(log_dir.is_dir());
        tracing::info!("written after init");
    }

    #[test]
    fn test_stderr_layer_stacks_on_file_layer() {
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::new("info"))
            .with(fmt::layer().with_writer(std::io::sink).with_ansi(false))
            .with(stderr_layer());

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("both layers receive this");
        });
    }
}
