// src/config.rs
//
// Explicit runtime configuration, read once at startup and injected into the
// search controller. Nothing else reads the environment.

use std::env;
use std::error::Error;

/// Env var holding the property API base URL, e.g. "http://localhost:8000/api".
pub const ENV_API_URL: &str = "HOMESCOUT_API_URL";
/// Env var holding the map-provider key. Optional; without it the
/// autocomplete capability is disabled and manual entry still works.
pub const ENV_MAPS_KEY: &str = "HOMESCOUT_MAPS_KEY";

/// Fallback when HOMESCOUT_API_URL is unset (local dev server).
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// Path prefix of the base URL, "" or "/something" (no trailing slash).
    pub prefix: String,
    pub maps_key: Option<String>,
}

impl ApiConfig {
    /// Read configuration from the process environment. A malformed base URL
    /// is a startup error; a missing one falls back to DEFAULT_API_URL.
    pub fn from_env() -> Result<Self, Box<dyn Error>> {
        let base = env::var(ENV_API_URL).unwrap_or_else(|_| s!(DEFAULT_API_URL));
        let (host, port, prefix) = parse_base_url(&base)?;

        let maps_key = env::var(ENV_MAPS_KEY).ok().filter(|k| !k.trim().is_empty());
        if maps_key.is_none() {
            logd!("Config: no {} set, autocomplete disabled", ENV_MAPS_KEY);
        }

        logf!("Config: API base {}:{}{}", host, port, prefix);
        Ok(Self { host, port, prefix, maps_key })
    }

    pub fn new(host: impl Into<String>, port: u16, prefix: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            prefix: prefix.into(),
            maps_key: None,
        }
    }
}

/// Split "http://host[:port][/prefix]" into parts. The net layer speaks plain
/// HTTP/1.0 over TCP, so https is rejected up front rather than failing later.
pub fn parse_base_url(url: &str) -> Result<(String, u16, String), Box<dyn Error>> {
    let rest = if let Some(r) = url.strip_prefix("http://") {
        r
    } else if url.starts_with("https://") {
        return Err(format!("https is not supported, use an http:// base URL: {}", url).into());
    } else {
        url // bare "host:port/prefix" is accepted
    };

    let (authority, path) = match rest.find('/') {
        Some(i) => (&rest[..i], rest[i..].trim_end_matches('/')),
        None => (rest, ""),
    };
    if authority.is_empty() {
        return Err(format!("Base URL has no host: {}", url).into());
    }

    let (host, port) = match authority.rsplit_once(':') {
        Some((h, p)) => (h.to_string(), p.parse::<u16>()?),
        None => (authority.to_string(), 80),
    };
    if host.is_empty() {
        return Err(format!("Base URL has no host: {}", url).into());
    }

    Ok((host, port, path.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_host() {
        let (h, p, pre) = parse_base_url("http://api.example.com").unwrap();
        assert_eq!(h, "api.example.com");
        assert_eq!(p, 80);
        assert_eq!(pre, "");
    }

    #[test]
    fn parses_port_and_prefix() {
        let (h, p, pre) = parse_base_url("http://localhost:8000/api/v1/").unwrap();
        assert_eq!(h, "localhost");
        assert_eq!(p, 8000);
        assert_eq!(pre, "/api/v1");
    }

    #[test]
    fn rejects_https_and_empty_host() {
        assert!(parse_base_url("https://secure.example.com").is_err());
        assert!(parse_base_url("http://").is_err());
        assert!(parse_base_url("http://:8000").is_err());
    }
}
