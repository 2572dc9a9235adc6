use alerter_config::AppConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE_NAME: &str = "college-alerter.log";

/// Builds the default filter directive for our own crates.
pub fn default_directive(level: &str) -> String {
    format!(
        "{crate_name}={level},alerter_core={level},alerter_db={level}",
        crate_name = env!("CARGO_CRATE_NAME")
    )
}

/// Initialize logging for the console application.
///
/// The menus own stdout, so events go to stderr, or to
/// `LOG_DIR/college-alerter.log` when a log directory is configured.
///
/// # Configuration
///
/// - **Log Level**: `LOG_LEVEL` / `--log-level` (default: "warn")
/// - **Filtering**: `RUST_LOG` replaces the default directive when set
///
/// Keep the returned guard alive for the whole run; dropping it flushes and
/// stops the background file writer.
pub fn init_logging(config: &AppConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&config.log_level)));

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = file_layer.is_none().then(|| {
        fmt::layer()
            .compact()
            .with_target(true)
            .with_writer(std::io::stderr)
    });

    if let Err(e) = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
    {
        eprintln!("Logging already initialised: {}", e);
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_covers_workspace_crates() {
        let directive = default_directive("debug");

        assert!(directive.contains("college_alerter=debug"));
        assert!(directive.contains("alerter_core=debug"));
        assert!(directive.contains("alerter_db=debug"));
    }
}
