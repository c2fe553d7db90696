//! `livedemo render` — render a single demo as an open block.

use anyhow::{Context, Result};
use clap::Args;

use livedemo_core::{AdocPage, Attributes};

use super::common::{parse_key_value, BuildArgs};

/// Arguments for `livedemo render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Demo id (directory name under `live-demos/`).
    pub demo: String,

    #[command(flatten)]
    pub build: BuildArgs,

    /// Macro attribute such as `type=tinydrive` or `tab=html`, repeatable.
    #[arg(long = "demo-attr", short = 'd', value_name = "NAME=VALUE", value_parser = parse_key_value)]
    pub demo_attrs: Vec<(String, String)>,

    /// Print the wrapper context as JSON instead of rendered markup.
    #[arg(long)]
    pub json: bool,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        let config = self.build.resolve()?;
        let mut extension = self.build.extension(&config)?;
        let attrs: Attributes = self.demo_attrs.into_iter().collect();

        if self.json {
            let ctx = extension
                .prepare(&config.attributes, &self.demo, &attrs)
                .with_context(|| format!("failed to prepare demo '{}'", self.demo))?;
            let value = ctx.to_value()?;
            println!("{}", serde_json::to_string_pretty(&value)?);
            return Ok(());
        }

        let mut page = AdocPage::parse("", &config.attributes);
        let block = extension
            .process(&mut page, &self.demo, &attrs)
            .with_context(|| format!("failed to render demo '{}'", self.demo))?;
        println!("{}", block.to_asciidoc());
        Ok(())
    }
}
