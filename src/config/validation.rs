use crate::config::types::{Config, CrawlerConfig, FetchConfig};
use crate::{ConfigError, UrlError, UrlResult};
use url::{ParseError, Url};

/// Shortest accepted start URL, after the default scheme is applied
pub const MIN_START_URL_LEN: usize = 11;

/// Longest accepted start URL
pub const MAX_START_URL_LEN: usize = 2000;

/// Prefix added to start URLs given without a scheme
const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_fetch_config(&config.fetch)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.workers < 1 {
        return Err(ConfigError::Validation(format!(
            "workers must be >= 1, got {}",
            config.workers
        )));
    }

    if config.max_depth < 1 {
        return Err(ConfigError::Validation(format!(
            "max_depth must be >= 1, got {}",
            config.max_depth
        )));
    }

    if config.idle_interval < 1 || config.idle_interval > 60_000 {
        return Err(ConfigError::Validation(format!(
            "idle_interval must be between 1 and 60000ms, got {}ms",
            config.idle_interval
        )));
    }

    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.user_agent.chars().any(char::is_control) {
        return Err(ConfigError::Validation(format!(
            "user_agent must not contain control characters, got {:?}",
            config.user_agent
        )));
    }

    if config.timeout < 1 {
        return Err(ConfigError::Validation(
            "timeout must be >= 1 second".to_string(),
        ));
    }

    if config.connect_timeout < 1 || config.connect_timeout > config.timeout {
        return Err(ConfigError::Validation(format!(
            "connect_timeout must be between 1 and timeout ({}s), got {}s",
            config.timeout, config.connect_timeout
        )));
    }

    Ok(())
}

/// Turns the user-supplied start argument into the crawl's seed URL
///
/// Arguments that do not begin with `http` get `http://` prepended, so
/// `example.com` is accepted. The result is rejected if its length falls
/// outside 11..=2000 bytes, if it does not parse, if it is relative, or if
/// it is not an http(s) URL with a host.
///
/// # Examples
///
/// ```
/// use sumi_scout::config::prepare_start_url;
///
/// let seed = prepare_start_url("localhost:9000/index.html").unwrap();
/// assert_eq!(seed.as_str(), "http://localhost:9000/index.html");
///
/// assert!(prepare_start_url("a.b").is_err());
/// ```
pub fn prepare_start_url(raw: &str) -> UrlResult<Url> {
    let candidate = if raw.starts_with("http") {
        raw.to_string()
    } else {
        format!("{}{}", DEFAULT_SCHEME_PREFIX, raw)
    };

    if !(MIN_START_URL_LEN..=MAX_START_URL_LEN).contains(&candidate.len()) {
        return Err(UrlError::InvalidLength(candidate.len()));
    }

    let url = Url::parse(&candidate).map_err(|e| match e {
        ParseError::RelativeUrlWithoutBase => UrlError::Relative,
        other => UrlError::Parse(other.to_string()),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::UnsupportedScheme(url.scheme().to_string()));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    Ok(url)
}
