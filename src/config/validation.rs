//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses and URLs before anything binds or connects
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: DigestConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::DigestConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a socket address")]
    BindAddress(String),

    #[error("listener.bind_address must not use port 0")]
    ZeroPort,

    #[error("{field} `{value}` is not a valid http(s) URL")]
    Url { field: &'static str, value: String },

    #[error("tracing.service_name must not be empty")]
    EmptyServiceName,
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &DigestConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match config.listener.bind_address.parse::<SocketAddr>() {
        Ok(addr) if addr.port() == 0 => errors.push(ValidationError::ZeroPort),
        Ok(_) => {}
        Err(_) => errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        )),
    }

    if let Some(base) = &config.listener.self_base_url {
        check_url(&mut errors, "listener.self_base_url", base);
    }

    check_url(&mut errors, "upstream.weather_url", &config.upstream.weather_url);
    check_url(&mut errors, "upstream.news_url", &config.upstream.news_url);
    check_url(&mut errors, "upstream.facts_url", &config.upstream.facts_url);

    if config.tracing.enabled {
        if config.tracing.service_name.trim().is_empty() {
            errors.push(ValidationError::EmptyServiceName);
        }
        check_url(&mut errors, "tracing.endpoint", &config.tracing.endpoint);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_url(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    let valid = Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false);

    if !valid {
        errors.push(ValidationError::Url {
            field,
            value: value.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(validate_config(&DigestConfig::default()).is_ok());
    }

    #[test]
    fn collects_every_error() {
        let mut config = DigestConfig::default();
        config.listener.bind_address = "0.0.0.0:0".into();
        config.upstream.news_url = "not a url".into();
        config.tracing.service_name = "  ".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::ZeroPort));
        assert!(errors.contains(&ValidationError::EmptyServiceName));
        assert!(errors.contains(&ValidationError::Url {
            field: "upstream.news_url",
            value: "not a url".into(),
        }));
    }

    #[test]
    fn rejects_unparseable_bind_address() {
        let mut config = DigestConfig::default();
        config.listener.bind_address = "localhost".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::BindAddress("localhost".into())]);
    }

    #[test]
    fn tracing_fields_ignored_when_disabled() {
        let mut config = DigestConfig::default();
        config.tracing.enabled = false;
        config.tracing.service_name = String::new();
        config.tracing.endpoint = String::new();

        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn rejects_non_http_scheme() {
        let mut config = DigestConfig::default();
        config.listener.self_base_url = Some("ftp://127.0.0.1:3000".into());

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
    }
}
