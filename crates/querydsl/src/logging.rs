use crate::Cli;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

/// Pick a log level from `--verbose` and the `LOG_LEVEL` environment
/// variable. Warnings are returned rather than logged because the logger
/// does not exist yet.
fn resolve_log_level(
    verbose: bool,
    env_val: Option<&str>,
) -> (tracing::Level, Vec<String>) {
    let mut warnings = vec![];
    if verbose {
        return (tracing::Level::DEBUG, warnings);
    }

    let level = match env_val.map(str::trim) {
        Some("DEBUG" | "debug") => tracing::Level::DEBUG,
        Some("INFO" | "info") => tracing::Level::INFO,
        Some("TRACE" | "trace") => tracing::Level::TRACE,
        Some("VERBOSE" | "verbose") => tracing::Level::DEBUG,
        Some(other) => {
            warnings.push(format!(
                "Invalid `LOG_LEVEL` environment variable value: `{other}`"
            ));
            DEFAULT_LOG_LEVEL
        },
        None => DEFAULT_LOG_LEVEL,
    };
    (level, warnings)
}

pub(crate) fn setup_logger(cli: &Cli) {
    let env_val = std::env::var("LOG_LEVEL").ok();
    let (log_level, mut log_level_warnings) =
        resolve_log_level(cli.verbose, env_val.as_deref());

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    for warning in log_level_warnings.drain(..) {
        log::warn!("{warning}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_overrides_environment() {
        let (level, warnings) = resolve_log_level(true, Some("trace"));
        assert_eq!(level, tracing::Level::DEBUG);
        assert!(warnings.is_empty());
    }

    #[test]
    fn reads_environment_value() {
        assert_eq!(resolve_log_level(false, Some(" TRACE ")).0, tracing::Level::TRACE);
        assert_eq!(resolve_log_level(false, Some("verbose")).0, tracing::Level::DEBUG);
        assert_eq!(resolve_log_level(false, None).0, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn invalid_environment_value_warns() {
        let (level, warnings) = resolve_log_level(false, Some("loud"));
        assert_eq!(level, DEFAULT_LOG_LEVEL);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("`loud`"));
    }
}
