//
//  gerrit-rest-client
//  config/hosts.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Host-specific configuration.
//!
//! Each Gerrit server is configured by its base URL. Servers served under a
//! path prefix (`https://example.com/gerrit`) keep the prefix in `url`; the
//! host key used in the config file is the bare hostname.

use serde::{Deserialize, Serialize};

use crate::auth::AuthCredential;

/// Settings for one Gerrit server.
///
/// # Example
///
/// ```rust
/// use gerrit_rest_client::config::HostConfig;
///
/// let mut host = HostConfig::new("https://review.example.com");
/// assert!(host.credential().is_none());
///
/// host.username = Some("jdoe".to_string());
/// host.http_password = Some("secret".to_string());
/// assert!(host.credential().is_some());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct HostConfig {
    /// Base URL of the server, including any path prefix.
    #[serde(default)]
    pub url: String,

    /// Gerrit username.
    #[serde(default)]
    pub username: Option<String>,

    /// HTTP password generated in Gerrit's settings.
    ///
    /// The `GERRIT_HTTP_PASSWORD` environment variable overrides this at the
    /// command line.
    #[serde(default)]
    pub http_password: Option<String>,

    /// Version reported for servers that predate the version endpoint.
    ///
    /// Defaults to [`PRE_VERSIONING_SENTINEL`](crate::api::PRE_VERSIONING_SENTINEL).
    #[serde(default)]
    pub version_fallback: Option<String>,
}

impl HostConfig {
    /// Creates a host entry with only the URL set.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// The credential for this host, if both username and password are set.
    pub fn credential(&self) -> Option<AuthCredential> {
        match (&self.username, &self.http_password) {
            (Some(username), Some(password)) => Some(AuthCredential::basic(username, password)),
            _ => None,
        }
    }
}

/// Normalizes a hostname or URL into a config key.
///
/// Strips the scheme, any path, and a trailing slash; lowercases the rest.
///
/// # Example
///
/// ```rust
/// use gerrit_rest_client::config::normalize_host;
///
/// assert_eq!(normalize_host("https://Review.Example.com/gerrit/"), "review.example.com");
/// assert_eq!(normalize_host("review.example.com"), "review.example.com");
/// ```
pub fn normalize_host(host: &str) -> String {
    let host = host.trim();
    let host = host.strip_prefix("https://").unwrap_or(host);
    let host = host.strip_prefix("http://").unwrap_or(host);
    let host = host.split('/').next().unwrap_or(host);
    host.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_host_keeps_port() {
        assert_eq!(normalize_host("http://localhost:8080/"), "localhost:8080");
    }

    #[test]
    fn test_credential_requires_both_parts() {
        let mut host = HostConfig::new("https://review.example.com");
        host.username = Some("jdoe".to_string());
        assert!(host.credential().is_none());
        host.http_password = Some("pw".to_string());
        assert_eq!(host.credential(), Some(AuthCredential::basic("jdoe", "pw")));
    }
}
