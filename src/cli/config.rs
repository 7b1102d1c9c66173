//
//  gerrit-rest-client
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! Read and write the `[core]` settings and register hosts in the
//! configuration file.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::config::{normalize_host, Config, HostConfig};
use crate::output::OutputWriter;

use super::GlobalOptions;

const VALID_CORE_KEYS: &[&str] = &["default_host", "timeout"];

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// List configuration values and hosts
    #[command(visible_alias = "ls")]
    List,

    /// Register a Gerrit host
    AddHost(AddHostArgs),

    /// Print the configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key (default_host, timeout)
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key (default_host, timeout)
    pub key: String,

    /// Value to set
    pub value: String,
}

#[derive(Args, Debug)]
pub struct AddHostArgs {
    /// Server URL, including any path prefix
    pub url: String,

    /// Gerrit username
    #[arg(long)]
    pub username: Option<String>,

    /// HTTP password generated in Gerrit's settings
    #[arg(long)]
    pub http_password: Option<String>,

    /// Version to report if the server predates the version endpoint
    #[arg(long)]
    pub version_fallback: Option<String>,

    /// Make this the default host
    #[arg(long)]
    pub default: bool,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get(args) => self.get(args, global),
            ConfigSubcommand::Set(args) => self.set(args),
            ConfigSubcommand::List => self.list(global),
            ConfigSubcommand::AddHost(args) => self.add_host(args),
            ConfigSubcommand::Path => self.path(global),
        }
    }

    fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        validate_key(&args.key)?;
        let config = Config::load()?;
        let value = config.get(&args.key);

        if global.json {
            let result = serde_json::json!({
                "key": args.key,
                "value": value,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else if let Some(v) = value {
            println!("{}", v);
        }
        Ok(())
    }

    fn set(&self, args: &SetArgs) -> Result<()> {
        validate_key(&args.key)?;
        let mut config = Config::load()?;
        if !config.set(&args.key, args.value.clone()) {
            bail!("Invalid value '{}' for {}", args.value, args.key);
        }
        config.save()?;

        OutputWriter::table().write_success(&format!("Set {} to {}", args.key, args.value));
        Ok(())
    }

    fn list(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;

        if global.json {
            let mut hosts: Vec<&String> = config.hosts.keys().collect();
            hosts.sort();
            let result = serde_json::json!({
                "core": config.core,
                "hosts": hosts,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        for key in VALID_CORE_KEYS {
            let value = config.get(key).unwrap_or_else(|| "-".to_string());
            println!("{}={}", key, value);
        }

        let mut hosts: Vec<(&String, &HostConfig)> = config.hosts.iter().collect();
        hosts.sort_by(|a, b| a.0.cmp(b.0));
        for (name, host) in hosts {
            let user = host.username.as_deref().unwrap_or("anonymous");
            println!("{} {} ({})", style(name).bold(), host.url, user);
        }
        Ok(())
    }

    fn add_host(&self, args: &AddHostArgs) -> Result<()> {
        let mut config = Config::load()?;
        let host = HostConfig {
            url: args.url.clone(),
            username: args.username.clone(),
            http_password: args.http_password.clone(),
            version_fallback: args.version_fallback.clone(),
        };
        let key = normalize_host(&host.url);
        if key.is_empty() {
            bail!("Invalid host URL '{}'", args.url);
        }

        config.add_host(host);
        if args.default || config.core.default_host.is_none() {
            config.core.default_host = Some(key.clone());
        }
        config.save()?;

        OutputWriter::table().write_success(&format!("Added host {}", key));
        Ok(())
    }

    fn path(&self, global: &GlobalOptions) -> Result<()> {
        let path = Config::config_path()?;

        if global.json {
            let result = serde_json::json!({
                "path": path.display().to_string(),
                "exists": path.exists(),
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", path.display());
        }
        Ok(())
    }
}

fn validate_key(key: &str) -> Result<()> {
    if !VALID_CORE_KEYS.contains(&key) {
        bail!(
            "Unknown config key '{}'. Valid keys: {}",
            key,
            VALID_CORE_KEYS.join(", ")
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("timeout").is_ok());
        let err = validate_key("editor").unwrap_err();
        assert!(err.to_string().contains("default_host, timeout"));
    }
}
