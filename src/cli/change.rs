//
//  gerrit-rest-client
//  cli/change.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Change commands
//!
//! Query changes, view a change with its labels, list the files of a
//! revision, and show verify-status plugin results.

use std::collections::BTreeMap;

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::api::ListOptions;
use crate::extensions::common::{ChangeInfo, FileInfo};
use crate::extensions::plugins::VerificationInfo;
use crate::extensions::GerritApi;
use crate::output::{
    format_status, format_vote, print_field, print_header, truncate, OutputWriter, TableBuilder,
    TableOutput,
};

use super::{build_api, GlobalOptions};

#[derive(Args, Debug)]
pub struct ChangeCommand {
    #[command(subcommand)]
    pub command: ChangeSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ChangeSubcommand {
    /// Query changes
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// View a change
    View(ViewArgs),

    /// List files modified in a revision
    Files(RevisionArgs),

    /// Show CI verifications reported through the verify-status plugin
    Verifications(RevisionArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Search query, e.g. "status:open owner:self"
    #[arg(default_value = "status:open")]
    pub query: String,

    /// Maximum number of changes to list
    #[arg(long, short = 'n', default_value = "25")]
    pub limit: u32,

    /// Number of changes to skip
    #[arg(long, short = 'S')]
    pub start: Option<u32>,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Change number, Change-Id, or project~branch~Change-Id
    pub id: String,
}

#[derive(Args, Debug)]
pub struct RevisionArgs {
    /// Change number, Change-Id, or project~branch~Change-Id
    pub id: String,

    /// Revision (patch set number or commit SHA)
    #[arg(long, short = 'r', default_value = "current")]
    pub revision: String,
}

impl ChangeCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ChangeSubcommand::List(args) => self.list(args, global).await,
            ChangeSubcommand::View(args) => self.view(args, global).await,
            ChangeSubcommand::Files(args) => self.files(args, global).await,
            ChangeSubcommand::Verifications(args) => self.verifications(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let api = build_api(global)?;
        let mut options = ListOptions::new().limit(args.limit);
        if let Some(start) = args.start {
            options = options.start(start);
        }

        let changes = api.changes()?.query(&args.query, &options).await?;
        let writer = OutputWriter::new_for(global.json);
        if changes.is_empty() && !global.json {
            writer.write_warning(&format!("No changes match '{}'", args.query));
            return Ok(());
        }
        writer.write(&ChangeList(changes))
    }

    async fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let api = build_api(global)?;
        let change = api.changes()?.id(&args.id)?.detail().await?;
        OutputWriter::new_for(global.json).write(&ChangeView(change))
    }

    async fn files(&self, args: &RevisionArgs, global: &GlobalOptions) -> Result<()> {
        let api = build_api(global)?;
        let files = api
            .changes()?
            .id(&args.id)?
            .revision(&args.revision)?
            .files()
            .await?;
        OutputWriter::new_for(global.json).write(&FileList(files))
    }

    async fn verifications(&self, args: &RevisionArgs, global: &GlobalOptions) -> Result<()> {
        let api = build_api(global)?;
        let verifications = api
            .changes()?
            .id(&args.id)?
            .revision(&args.revision)?
            .verify_status()?
            .verifications()
            .await?;

        let writer = OutputWriter::new_for(global.json);
        if verifications.is_empty() && !global.json {
            writer.write_warning("No verifications reported for this revision");
            return Ok(());
        }
        writer.write(&VerificationList(verifications))
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct ChangeList(Vec<ChangeInfo>);

impl TableOutput for ChangeList {
    fn print_table(&self, color: bool) {
        let rows = self.0.iter().map(|change| {
            vec![
                change.number.map(|n| n.to_string()).unwrap_or_default(),
                change.project.clone(),
                change.branch.clone(),
                format_status(&change.status.to_string(), color),
                owner_name(change),
                truncate(&change.subject, 60),
            ]
        });

        TableBuilder::new()
            .color(color)
            .headers(["Number", "Project", "Branch", "Status", "Owner", "Subject"])
            .rows(rows)
            .print();

        if self.0.last().and_then(|c| c.more_changes).unwrap_or(false) {
            println!("More changes available; use --start to page.");
        }
    }
}

fn owner_name(change: &ChangeInfo) -> String {
    change
        .owner
        .as_ref()
        .and_then(|owner| {
            owner
                .name
                .clone()
                .or_else(|| owner.username.clone())
                .or_else(|| owner.account_id.map(|id| id.to_string()))
        })
        .unwrap_or_else(|| "-".to_string())
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct ChangeView(ChangeInfo);

impl TableOutput for ChangeView {
    fn print_table(&self, color: bool) {
        let change = &self.0;
        let title = match change.number {
            Some(number) => format!("{}: {}", number, change.subject),
            None => change.subject.clone(),
        };
        print_header(&title);

        print_field("Status", &format_status(&change.status.to_string(), color), color);
        print_field("Project", &change.project, color);
        print_field("Branch", &change.branch, color);
        if let Some(topic) = &change.topic {
            print_field("Topic", topic, color);
        }
        print_field("Owner", &owner_name(change), color);
        print_field("Change-Id", &change.change_id, color);
        if let Some(updated) = &change.updated {
            print_field("Updated", &updated.format("%Y-%m-%d %H:%M").to_string(), color);
        }
        if let (Some(insertions), Some(deletions)) = (change.insertions, change.deletions) {
            print_field("Size", &format!("+{} -{}", insertions, deletions), color);
        }

        if let Some(labels) = &change.labels {
            if !labels.is_empty() {
                println!();
                let rows = labels.iter().map(|(name, label)| {
                    let votes = label
                        .all
                        .iter()
                        .filter_map(|approval| {
                            let value = approval.value?;
                            if value == 0 {
                                return None;
                            }
                            let who = approval
                                .account
                                .name
                                .clone()
                                .unwrap_or_else(|| "?".to_string());
                            Some(format!("{} {}", format_vote(value, color), who))
                        })
                        .collect::<Vec<_>>()
                        .join(", ");
                    vec![name.clone(), votes]
                });
                TableBuilder::new()
                    .color(color)
                    .headers(["Label", "Votes"])
                    .rows(rows)
                    .print();
            }
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct FileList(BTreeMap<String, FileInfo>);

impl TableOutput for FileList {
    fn print_table(&self, color: bool) {
        let rows = self.0.iter().map(|(path, file)| {
            let path = match &file.old_path {
                Some(old) => format!("{} (from {})", path, old),
                None => path.clone(),
            };
            vec![
                file.status.clone().unwrap_or_else(|| "M".to_string()),
                path,
                format!("+{}", file.lines_inserted.unwrap_or(0)),
                format!("-{}", file.lines_deleted.unwrap_or(0)),
            ]
        });

        TableBuilder::new()
            .color(color)
            .headers(["Status", "Path", "Added", "Removed"])
            .rows(rows)
            .print();
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct VerificationList(BTreeMap<String, VerificationInfo>);

impl TableOutput for VerificationList {
    fn print_table(&self, color: bool) {
        let rows = self.0.iter().map(|(uuid, job)| {
            vec![
                job.name.clone().unwrap_or_else(|| uuid.clone()),
                format_vote(i32::from(job.value), color),
                job.reporter.clone().unwrap_or_default(),
                job.duration.clone().unwrap_or_default(),
                job.url.clone().unwrap_or_default(),
            ]
        });

        TableBuilder::new()
            .color(color)
            .headers(["Job", "Result", "Reporter", "Duration", "URL"])
            .rows(rows)
            .print();
    }
}
