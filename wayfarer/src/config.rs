use std::net::SocketAddr;

use anyhow::{Context, Result};

pub(crate) const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub(crate) const DEFAULT_UPSTREAM_URL: &str = "http://localhost:5000";

/// Runtime settings, all optional in the environment.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) listen_addr: SocketAddr,
    /// Base URL of the search service the API routes forward to.
    pub(crate) upstream_url: String,
}

impl Config {
    pub(crate) fn from_env() -> Result<Self> {
        let listen_addr = std::env::var("WAYFARER_LISTEN_ADDR")
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_addr
            .parse()
            .with_context(|| format!("invalid WAYFARER_LISTEN_ADDR {listen_addr:?}"))?;
        let upstream_url = normalize_base_url(
            &std::env::var("WAYFARER_UPSTREAM_URL")
                .unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string()),
        );
        Ok(Self {
            listen_addr,
            upstream_url,
        })
    }
}

/// Upstream paths are joined as `{base}{path}`, so the base must not end in a
/// slash.
fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse() {
        let addr: SocketAddr = DEFAULT_LISTEN_ADDR.parse().unwrap();
        assert_eq!(addr.port(), 8080);
        assert_eq!(normalize_base_url(DEFAULT_UPSTREAM_URL), DEFAULT_UPSTREAM_URL);
    }

    #[test]
    fn trailing_slashes_are_stripped() {
        assert_eq!(
            normalize_base_url("http://search.internal:5000/"),
            "http://search.internal:5000"
        );
        assert_eq!(
            normalize_base_url("http://search.internal:5000///"),
            "http://search.internal:5000"
        );
    }
}
