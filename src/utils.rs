use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Diagnostics go to stderr; stdout is reserved for the report.
pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn should_add_https_scheme_to_bare_host() {
        assert_eq!("https://wishcarebd.com", normalize_url("wishcarebd.com"));
        assert_eq!("https://wishcarebd.com", normalize_url("  wishcarebd.com "));
    }

    #[test]
    fn should_keep_explicit_scheme() {
        assert_eq!("http://127.0.0.1:8080", normalize_url("http://127.0.0.1:8080"));
        assert_eq!("https://wishcarebd.com", normalize_url("https://wishcarebd.com"));
    }
}
