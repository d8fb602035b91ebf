use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Short human-readable lines.
    #[default]
    Compact,
    /// JSON lines, for running the refresher under a process supervisor.
    Json,
}

/// Directives used when `RUST_LOG` is unset.
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "campus_menu=debug,info"
    } else {
        "campus_menu=info"
    }
}

/// Install the global subscriber.
///
/// Logs go to stderr so menu output on stdout (including `--json`) stays
/// machine-readable.
pub fn init_logger(format: LogFormat, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));
    let layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    match format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_enables_debug_for_this_crate() {
        assert_eq!(default_directives(true), "campus_menu=debug,info");
        assert_eq!(default_directives(false), "campus_menu=info");
        assert!(default_directives(true).parse::<EnvFilter>().is_ok());
    }
}
