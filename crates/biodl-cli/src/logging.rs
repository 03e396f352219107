//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Logging configuration built from CLI input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    /// Number of `-v` flags.
    pub verbosity: u8,
}

impl LogConfig {
    pub const fn from_verbosity(verbosity: u8) -> Self {
        Self { verbosity }
    }

    /// Default filter directive for the verbosity level.
    pub const fn level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Whether per-pair progress lines should be printed.
    pub const fn is_verbose(&self) -> bool {
        self.verbosity > 0
    }
}

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the verbosity flags. Calling this twice
/// is harmless; the second call is ignored.
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        let levels: Vec<_> = (0..=4)
            .map(|v| LogConfig::from_verbosity(v).level())
            .collect();
        assert_eq!(levels, ["warn", "info", "debug", "trace", "trace"]);
    }

    #[test]
    fn quiet_by_default() {
        assert!(!LogConfig::from_verbosity(0).is_verbose());
        assert!(LogConfig::from_verbosity(1).is_verbose());
    }
}
