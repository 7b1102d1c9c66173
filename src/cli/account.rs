//
//  gerrit-rest-client
//  cli/account.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Account commands

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::extensions::common::AccountInfo;
use crate::extensions::GerritApi;
use crate::output::{print_field, print_header, OutputWriter, TableOutput};

use super::{build_api, GlobalOptions};

#[derive(Args, Debug)]
pub struct AccountCommand {
    #[command(subcommand)]
    pub command: AccountSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AccountSubcommand {
    /// View an account (defaults to the authenticated user)
    View(ViewArgs),
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Account id, username, or email address
    pub id: Option<String>,
}

impl AccountCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            AccountSubcommand::View(args) => self.view(args, global).await,
        }
    }

    async fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let api = build_api(global)?;
        let accounts = api.accounts()?;
        let account = match &args.id {
            Some(id) => accounts.id(id)?,
            None => accounts.self_account()?,
        };
        let info = account.get().await?;
        OutputWriter::new_for(global.json).write(&AccountView(info))
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct AccountView(AccountInfo);

impl TableOutput for AccountView {
    fn print_table(&self, color: bool) {
        let account = &self.0;
        let title = account
            .display_name
            .clone()
            .or_else(|| account.name.clone())
            .unwrap_or_else(|| "Account".to_string());
        print_header(&title);

        if let Some(id) = account.account_id {
            print_field("Id", &id.to_string(), color);
        }
        if let Some(username) = &account.username {
            print_field("Username", username, color);
        }
        if let Some(email) = &account.email {
            print_field("Email", email, color);
        }
    }
}
