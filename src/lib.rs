//
//  gerrit-rest-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Gerrit REST Client Library
//!
//! A typed client for the Gerrit Code Review REST API, plus the `gerrit`
//! command-line front end built on it.
//!
//! ## Overview
//!
//! Callers navigate immutable resource handles (changes, revisions,
//! projects, commits, accounts, groups, server config) and call endpoint
//! methods on them. Each endpoint method performs exactly one REST exchange
//! through a [`Transport`](api::Transport) and parses the body into a typed
//! result.
//!
//! ## Features
//!
//! - **Extension Traits**: every resource is a trait whose methods default
//!   to `NotImplemented`, so alternative backends only implement what they
//!   support
//! - **REST Backend**: `reqwest`-based transport with per-segment URL
//!   encoding, the `/a/` authenticated prefix, and XSSI prefix stripping
//! - **Version Fallback**: servers that predate the version endpoint are
//!   reported as `"<2.8"` instead of failing
//!
//! ## Module Structure
//!
//! - [`extensions`]: resource traits and typed results
//! - [`api`]: the REST-backed implementations and the transport
//! - [`auth`]: request credentials
//! - [`config`]: configuration file management
//! - [`output`]: table and JSON rendering for the CLI
//! - [`cli`]: command-line interface definitions using clap
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use gerrit_rest_client::api::{GerritClient, GerritRestApi};
//! use gerrit_rest_client::extensions::GerritApi;
//!
//! # async fn example() -> Result<(), gerrit_rest_client::api::ApiError> {
//! let api = GerritRestApi::from_client(GerritClient::new("https://review.example.com")?);
//! let version = api.config()?.server()?.get_version().await?;
//! println!("Gerrit {}", version);
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
///
/// Contains the `gerrit` commands, arguments, and subcommands defined using
/// the clap derive API.
pub mod cli;

/// REST-backed resource handles and the HTTP transport.
pub mod api;

/// Request credentials.
pub mod auth;

/// Configuration file management.
///
/// Stored in platform-specific locations:
/// - Linux: `~/.config/gerrit/config.toml`
/// - macOS: `~/Library/Application Support/gerrit/config.toml`
/// - Windows: `%APPDATA%\gerrit\config\config.toml`
pub mod config;

/// Extension-point traits and typed results.
pub mod extensions;

/// Output formatting for the CLI (table and JSON).
pub mod output;

/// Re-export of the main CLI struct.
///
/// ```rust,no_run
/// use clap::Parser;
/// use gerrit_rest_client::Cli;
///
/// let cli = Cli::parse();
/// ```
pub use cli::Cli;

/// Re-export of the configuration struct.
pub use config::Config;

/// Name of the CLI binary.
pub const APP_NAME: &str = "gerrit";

/// The crate version, from `Cargo.toml`.
///
/// ```rust
/// use gerrit_rest_client::VERSION;
///
/// println!("gerrit version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// Standardized exit codes so scripts can detect the outcome of a command.
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    ///
    /// Clap reports parse errors with this code.
    pub const USAGE: i32 = 2;

    /// The server rejected the credentials (HTTP 401 or 403).
    pub const AUTH_ERROR: i32 = 4;

    /// The requested resource does not exist (HTTP 404).
    pub const NOT_FOUND: i32 = 8;

    /// Maps a command error to an exit code.
    ///
    /// HTTP failures from the API map by status; everything else is
    /// [`ERROR`].
    ///
    /// ```rust
    /// use gerrit_rest_client::api::ApiError;
    /// use gerrit_rest_client::exit_codes;
    ///
    /// let err = anyhow::Error::new(ApiError::Http { status: 404, message: "Not found".into() });
    /// assert_eq!(exit_codes::for_error(&err), exit_codes::NOT_FOUND);
    /// ```
    pub fn for_error(err: &anyhow::Error) -> i32 {
        match err
            .downcast_ref::<crate::api::ApiError>()
            .and_then(|e| e.status())
        {
            Some(401) | Some(403) => AUTH_ERROR,
            Some(404) => NOT_FOUND,
            _ => ERROR,
        }
    }
}
