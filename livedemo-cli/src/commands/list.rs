//! `livedemo list` — show the demos a module provides.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use livedemo_core::types::{ATTR_PAGE_COMPONENT, ATTR_PAGE_MODULE, ATTR_PAGE_VERSION, ROOT_MODULE};
use livedemo_core::{ContentRole, DemoContext, DemoListing, FsCatalog};

use super::common::BuildArgs;

/// Arguments for `livedemo list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub build: BuildArgs,

    /// Component name (defaults to the `page-component-name` attribute).
    #[arg(long)]
    pub component: Option<String>,

    /// Component version (defaults to the `page-component-version` attribute).
    #[arg(long = "component-version", value_name = "VERSION")]
    pub component_version: Option<String>,

    /// Module (defaults to the `page-module` attribute, then ROOT).
    #[arg(long)]
    pub module: Option<String>,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Tabled)]
struct DemoRow {
    #[tabled(rename = "demo")]
    id: String,
    #[tabled(rename = "html")]
    html: &'static str,
    #[tabled(rename = "js")]
    js: &'static str,
    #[tabled(rename = "example.js")]
    examplejs: &'static str,
    #[tabled(rename = "example.html")]
    examplehtml: &'static str,
    #[tabled(rename = "css")]
    css: &'static str,
}

#[derive(Serialize)]
struct DemoJson {
    id: String,
    roles: Vec<&'static str>,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let config = self.build.resolve()?;
        let attrs = &config.attributes;
        let context = DemoContext::new(
            self.module
                .as_deref()
                .or_else(|| attrs.get(ATTR_PAGE_MODULE))
                .unwrap_or(ROOT_MODULE),
            self.component
                .as_deref()
                .or_else(|| attrs.get(ATTR_PAGE_COMPONENT))
                .context("no component given; pass --component or set page-component-name")?,
            self.component_version
                .as_deref()
                .or_else(|| attrs.get(ATTR_PAGE_VERSION))
                .context("no version given; pass --component-version or set page-component-version")?,
        );

        let demos = FsCatalog::new(&config.catalog)
            .list_demos(&context)
            .with_context(|| format!("failed to list demos in {context}"))?;

        if self.json {
            let out: Vec<DemoJson> = demos
                .iter()
                .map(|d| DemoJson {
                    id: d.id.clone(),
                    roles: d.roles.iter().map(ContentRole::name).collect(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&out)?);
            return Ok(());
        }

        if demos.is_empty() {
            println!("No live demos found in {context}.");
            return Ok(());
        }

        println!("{} ({} demos)", context.to_string().bold(), demos.len());
        let mut table = Table::new(demos.iter().map(row));
        table.with(Style::rounded());
        println!("{table}");
        Ok(())
    }
}

fn row(demo: &DemoListing) -> DemoRow {
    let mark = |role: ContentRole| if demo.roles.contains(&role) { "✓" } else { "" };
    DemoRow {
        id: demo.id.clone(),
        html: mark(ContentRole::Html),
        js: mark(ContentRole::Js),
        examplejs: mark(ContentRole::Examplejs),
        examplehtml: mark(ContentRole::Examplehtml),
        css: mark(ContentRole::Css),
    }
}
