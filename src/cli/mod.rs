//
//  gerrit-rest-client
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod account;
mod change;
mod completion;
mod config;
mod project;
mod server;

pub use account::AccountCommand;
pub use change::ChangeCommand;
pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use project::ProjectCommand;
pub use server::ServerCommand;

use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use crate::api::{GerritClient, GerritRestApi};
use crate::config::{Config, HostConfig};

/// Gerrit CLI - Query a Gerrit Code Review server from the command line
#[derive(Parser, Debug)]
#[command(
    name = "gerrit",
    version,
    about = "Query a Gerrit Code Review server from the command line",
    long_about = "gerrit is a command-line front end for the Gerrit REST API.\n\n\
                  It reads hosts and credentials from its config file and brings changes,\n\
                  projects, and server details to your terminal.",
    propagate_version = true,
    after_help = "Use 'gerrit <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Configured host to talk to (defaults to core.default_host)
    #[arg(long, short = 'H', global = true, env = "GERRIT_HOST")]
    pub host: Option<String>,

    /// Server URL, bypassing host lookup
    #[arg(long, global = true, env = "GERRIT_URL")]
    pub url: Option<String>,

    /// Username for authenticated requests
    #[arg(long, short = 'u', global = true, env = "GERRIT_USER")]
    pub user: Option<String>,

    /// HTTP password for authenticated requests
    #[arg(long, global = true, env = "GERRIT_HTTP_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect the server
    Server(ServerCommand),

    /// Query and inspect changes
    #[command(visible_alias = "c")]
    Change(ChangeCommand),

    /// Query and inspect projects
    #[command(visible_alias = "proj")]
    Project(ProjectCommand),

    /// Inspect accounts
    Account(AccountCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Print version information
    Version,
}

/// Resolves the host settings for a command.
///
/// `--url` wins over `--host`, which wins over `core.default_host`. A
/// `--url` that matches a configured host keeps that host's credentials.
/// `--user` and `--password` override whatever the file says.
pub fn resolve_host_config(config: &Config, global: &GlobalOptions) -> Result<HostConfig> {
    let mut host = match &global.url {
        Some(url) => {
            let mut host = config.host_config(url).cloned().unwrap_or_default();
            host.url = url.clone();
            host
        }
        None => match config.resolve_host(global.host.as_deref()) {
            Some(host) => host.clone(),
            None => {
                return Err(match &global.host {
                    Some(name) => anyhow!("No configuration for host '{}'", name),
                    None => anyhow!(
                        "No Gerrit host configured. Pass --url or set core.default_host"
                    ),
                })
            }
        },
    };

    if let Some(user) = &global.user {
        host.username = Some(user.clone());
    }
    if let Some(password) = &global.password {
        host.http_password = Some(password.clone());
    }
    Ok(host)
}

/// Builds the root API handle for a command from config and global flags.
pub fn build_api(global: &GlobalOptions) -> Result<GerritRestApi> {
    let config = Config::load()?;
    let host = resolve_host_config(&config, global)?;

    let mut client = GerritClient::from_config(&host)?;
    if let Some(seconds) = config.core.timeout {
        client = client.with_timeout(Duration::from_secs(seconds))?;
    }
    tracing::debug!(
        url = %client.base_url(),
        authenticated = client.is_authenticated(),
        "resolved host"
    );

    let mut api = GerritRestApi::from_client(client);
    if let Some(sentinel) = host.version_fallback {
        api = api.with_version_sentinel(sentinel);
    }
    Ok(api)
}
