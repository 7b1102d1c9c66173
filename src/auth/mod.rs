//
//  gerrit-rest-client
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication
//!
//! Gerrit authenticates REST calls with the account's generated HTTP
//! password over HTTP Basic, or with a bearer token where an OAuth or
//! token-based realm is configured. Authenticated requests go under the
//! `/a/` path prefix; the client adds it whenever a credential is set.
//!
//! ## Example
//!
//! ```rust
//! use gerrit_rest_client::auth::AuthCredential;
//!
//! let credential = AuthCredential::basic("jdoe", "generated-http-password");
//! assert_eq!(credential.username(), Some("jdoe"));
//! ```

use reqwest::RequestBuilder;

/// Credentials attached to every request of a client.
///
/// # Variants
///
/// - `Basic`: username plus the HTTP password generated in Gerrit's settings.
/// - `Bearer`: an access token for token-based realms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthCredential {
    /// HTTP Basic authentication with the Gerrit HTTP password.
    Basic {
        /// The Gerrit username.
        username: String,
        /// The generated HTTP password.
        password: String,
    },
    /// Bearer token authentication.
    Bearer {
        /// The access token.
        token: String,
    },
}

impl AuthCredential {
    /// Creates a Basic credential.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Creates a Bearer credential.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Returns the username, if the credential carries one.
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Basic { username, .. } => Some(username),
            Self::Bearer { .. } => None,
        }
    }

    /// Applies the authentication credential to an HTTP request.
    ///
    /// # Parameters
    ///
    /// - `request`: The [`RequestBuilder`] to add authentication headers to.
    ///
    /// # Returns
    ///
    /// Returns the modified [`RequestBuilder`] with the `Authorization` header set.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Basic { username, password } => request.basic_auth(username, Some(password)),
            Self::Bearer { token } => request.bearer_auth(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_header() {
        let client = reqwest::Client::new();
        let request = AuthCredential::basic("jdoe", "secret")
            .apply_to_request(client.get("http://localhost/a/accounts/self"))
            .build()
            .unwrap();
        let header = request.headers().get(reqwest::header::AUTHORIZATION).unwrap();
        assert_eq!(header.to_str().unwrap(), "Basic amRvZTpzZWNyZXQ=");
    }

    #[test]
    fn test_bearer_header() {
        let client = reqwest::Client::new();
        let request = AuthCredential::bearer("tok")
            .apply_to_request(client.get("http://localhost/a/accounts/self"))
            .build()
            .unwrap();
        let header = request.headers().get(reqwest::header::AUTHORIZATION).unwrap();
        assert_eq!(header.to_str().unwrap(), "Bearer tok");
        assert_eq!(AuthCredential::bearer("tok").username(), None);
    }
}
