//
//  gerrit-rest-client
//  cli/server.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Server inspection commands

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::extensions::common::ServerInfo;
use crate::extensions::GerritApi;
use crate::output::{format_bool, print_field, print_header, OutputWriter, TableOutput};

use super::{build_api, GlobalOptions};

#[derive(Args, Debug)]
pub struct ServerCommand {
    #[command(subcommand)]
    pub command: ServerSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ServerSubcommand {
    /// Print the server's Gerrit version
    Version,

    /// Show server configuration
    Info,
}

impl ServerCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ServerSubcommand::Version => self.version(global).await,
            ServerSubcommand::Info => self.info(global).await,
        }
    }

    async fn version(&self, global: &GlobalOptions) -> Result<()> {
        let api = build_api(global)?;
        let version = api.config()?.server()?.get_version().await?;
        OutputWriter::new_for(global.json).write(&ServerVersion { version })
    }

    async fn info(&self, global: &GlobalOptions) -> Result<()> {
        let api = build_api(global)?;
        let info = api.config()?.server()?.get_info().await?;
        OutputWriter::new_for(global.json).write(&ServerInfoView(info))
    }
}

#[derive(Debug, Serialize)]
struct ServerVersion {
    version: String,
}

impl TableOutput for ServerVersion {
    fn print_table(&self, _color: bool) {
        println!("{}", self.version);
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct ServerInfoView(ServerInfo);

impl TableOutput for ServerInfoView {
    fn print_table(&self, color: bool) {
        let info = &self.0;
        print_header("Server");

        if let Some(gerrit) = &info.gerrit {
            if let Some(all_projects) = &gerrit.all_projects {
                print_field("All-Projects", all_projects, color);
            }
            if let Some(all_users) = &gerrit.all_users {
                print_field("All-Users", all_users, color);
            }
            if let Some(doc_url) = &gerrit.doc_url {
                print_field("Docs", doc_url, color);
            }
        }

        if let Some(auth) = &info.auth {
            if let Some(auth_type) = &auth.auth_type {
                print_field("Auth", auth_type, color);
            }
            if let Some(cla) = auth.use_contributor_agreements {
                print_field("Contributor agreements", &format_bool(cla, color), color);
            }
        }

        if let Some(change) = &info.change {
            if let Some(large) = change.large_change {
                print_field("Large change", &large.to_string(), color);
            }
            if let Some(whole_topic) = change.submit_whole_topic {
                print_field("Submit whole topic", &format_bool(whole_topic, color), color);
            }
        }
    }
}
