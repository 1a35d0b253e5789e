use log::debug;

/// Filter used when neither `--log-filter` nor `RUST_LOG` is set.
/// wgpu and naga log shader and device details at info, so they are held to warn.
pub const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

/// Pick the active filter: the command line wins over `RUST_LOG`
pub fn resolve_filter(cli_filter: Option<&str>, env_filter: Option<String>) -> String {
    match (cli_filter, env_filter) {
        (Some(filter), _) => filter.to_string(),
        (None, Some(filter)) if !filter.trim().is_empty() => filter,
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Install the env_logger backend; a second call leaves the first logger in place
pub fn init_logging(cli_filter: Option<&str>) {
    let filter = resolve_filter(cli_filter, std::env::var("RUST_LOG").ok());

    let mut builder = env_logger::Builder::new();
    builder.parse_filters(&filter).format_timestamp_millis();

    match builder.try_init() {
        Ok(()) => debug!("Logging with filter {:?}", filter),
        Err(_) => debug!("Logger already installed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_filter_wins() {
        assert_eq!(resolve_filter(Some("debug"), Some("trace".to_string())), "debug");
    }

    #[test]
    fn test_env_filter_used_without_flag() {
        assert_eq!(
            resolve_filter(None, Some("fractal_viewer=trace".to_string())),
            "fractal_viewer=trace"
        );
    }

    #[test]
    fn test_default_filter() {
        assert_eq!(resolve_filter(None, None), DEFAULT_FILTER);
        assert_eq!(resolve_filter(None, Some("  ".to_string())), DEFAULT_FILTER);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging(Some("warn"));
        init_logging(None);
    }
}
