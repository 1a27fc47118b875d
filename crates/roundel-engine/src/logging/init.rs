use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "roundel_engine=debug,wgpu_core=warn") and wins over `RUST_LOG`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    /// Filter used when neither `env_filter` nor `RUST_LOG` is set.
    pub default_filter: String,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            // wgpu is chatty at info.
            default_filter: "info,wgpu_core=warn,wgpu_hal=warn,naga=warn".to_string(),
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = resolve_filter(&config, std::env::var("RUST_LOG").ok());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        builder.write_style(config.write_style);

        // Another logger (a test harness, an embedding app) may already be installed.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized ({filter})");
    });
}

fn resolve_filter(config: &LoggingConfig, rust_log: Option<String>) -> String {
    config
        .env_filter
        .clone()
        .or(rust_log.filter(|f| !f.trim().is_empty()))
        .unwrap_or_else(|| config.default_filter.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let config = LoggingConfig {
            env_filter: Some("warn".into()),
            ..LoggingConfig::default()
        };
        assert_eq!(resolve_filter(&config, Some("trace".into())), "warn");
    }

    #[test]
    fn rust_log_beats_default() {
        let config = LoggingConfig::default();
        assert_eq!(resolve_filter(&config, Some("debug".into())), "debug");
    }

    #[test]
    fn blank_rust_log_uses_default() {
        let config = LoggingConfig::default();
        assert_eq!(resolve_filter(&config, Some("  ".into())), config.default_filter);
        assert_eq!(resolve_filter(&config, None), config.default_filter);
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig::default());
    }
}
