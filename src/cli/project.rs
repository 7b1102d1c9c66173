//
//  gerrit-rest-client
//  cli/project.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Project commands
//!
//! List projects and branches, and look up a commit, optionally with the
//! branches and tags that contain it.

use std::collections::BTreeMap;

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::api::ListOptions;
use crate::extensions::common::{BranchInfo, CommitInfo, IncludedInInfo, ProjectInfo};
use crate::extensions::GerritApi;
use crate::output::{print_field, print_header, truncate, OutputWriter, TableBuilder, TableOutput};

use super::{build_api, GlobalOptions};

#[derive(Args, Debug)]
pub struct ProjectCommand {
    #[command(subcommand)]
    pub command: ProjectSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ProjectSubcommand {
    /// List projects
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// List branches of a project
    Branches(BranchesArgs),

    /// Show a commit
    Commit(CommitArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only projects whose name starts with this prefix
    #[arg(long, short = 'p')]
    pub prefix: Option<String>,

    /// Maximum number of projects to list
    #[arg(long, short = 'n', default_value = "25")]
    pub limit: u32,
}

#[derive(Args, Debug)]
pub struct BranchesArgs {
    /// Project name, e.g. platform/build
    pub project: String,

    /// Maximum number of branches to list
    #[arg(long, short = 'n', default_value = "50")]
    pub limit: u32,
}

#[derive(Args, Debug)]
pub struct CommitArgs {
    /// Project name, e.g. platform/build
    pub project: String,

    /// Commit SHA
    pub commit: String,

    /// Show branches and tags containing the commit instead
    #[arg(long)]
    pub included_in: bool,
}

impl ProjectCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ProjectSubcommand::List(args) => self.list(args, global).await,
            ProjectSubcommand::Branches(args) => self.branches(args, global).await,
            ProjectSubcommand::Commit(args) => self.commit(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let api = build_api(global)?;
        let mut options = ListOptions::new().limit(args.limit);
        if let Some(prefix) = &args.prefix {
            options = options.prefix(prefix.clone());
        }

        let projects = api.projects()?.list(&options).await?;
        OutputWriter::new_for(global.json).write(&ProjectList(projects))
    }

    async fn branches(&self, args: &BranchesArgs, global: &GlobalOptions) -> Result<()> {
        let api = build_api(global)?;
        let options = ListOptions::new().limit(args.limit);
        let branches = api
            .projects()?
            .name(&args.project)?
            .branches(&options)
            .await?;
        OutputWriter::new_for(global.json).write(&BranchList(branches))
    }

    async fn commit(&self, args: &CommitArgs, global: &GlobalOptions) -> Result<()> {
        let api = build_api(global)?;
        let commit = api.projects()?.name(&args.project)?.commit(&args.commit)?;
        let writer = OutputWriter::new_for(global.json);

        if args.included_in {
            let included = commit.included_in().await?;
            writer.write(&IncludedInView(included))
        } else {
            let info = commit.get().await?;
            writer.write(&CommitView(info))
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct ProjectList(BTreeMap<String, ProjectInfo>);

impl TableOutput for ProjectList {
    fn print_table(&self, color: bool) {
        let rows = self.0.iter().map(|(name, project)| {
            vec![
                name.clone(),
                project.state.clone().unwrap_or_else(|| "ACTIVE".to_string()),
                truncate(project.description.as_deref().unwrap_or("-"), 50),
            ]
        });

        TableBuilder::new()
            .color(color)
            .headers(["Name", "State", "Description"])
            .rows(rows)
            .print();
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct BranchList(Vec<BranchInfo>);

impl TableOutput for BranchList {
    fn print_table(&self, color: bool) {
        let rows = self
            .0
            .iter()
            .map(|branch| vec![branch.git_ref.clone(), branch.revision.clone()]);

        TableBuilder::new()
            .color(color)
            .headers(["Ref", "Revision"])
            .rows(rows)
            .print();
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct CommitView(CommitInfo);

impl TableOutput for CommitView {
    fn print_table(&self, color: bool) {
        let commit = &self.0;
        let title = commit
            .subject
            .clone()
            .or_else(|| commit.commit.clone())
            .unwrap_or_else(|| "Commit".to_string());
        print_header(&title);

        if let Some(sha) = &commit.commit {
            print_field("Commit", sha, color);
        }
        if let Some(author) = &commit.author {
            print_field("Author", &format!("{} <{}>", author.name, author.email), color);
            print_field("Date", &author.date.format("%Y-%m-%d %H:%M:%S").to_string(), color);
        }
        for parent in &commit.parents {
            if let Some(sha) = &parent.commit {
                print_field("Parent", sha, color);
            }
        }

        if let Some(message) = &commit.message {
            println!();
            for line in message.lines() {
                println!("    {}", line);
            }
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct IncludedInView(IncludedInInfo);

impl TableOutput for IncludedInView {
    fn print_table(&self, color: bool) {
        let included = &self.0;
        let branches = if included.branches.is_empty() {
            "-".to_string()
        } else {
            included.branches.join(", ")
        };
        let tags = if included.tags.is_empty() {
            "-".to_string()
        } else {
            included.tags.join(", ")
        };
        print_field("Branches", &branches, color);
        print_field("Tags", &tags, color);

        if let Some(external) = &included.external {
            for (system, refs) in external {
                print_field(system, &refs.join(", "), color);
            }
        }
    }
}
