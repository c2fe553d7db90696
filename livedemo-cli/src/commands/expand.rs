//! `livedemo expand` — expand every liveDemo macro in an AsciiDoc page.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use livedemo_extension::expand_page;

use super::common::BuildArgs;

/// Arguments for `livedemo expand`.
#[derive(Args, Debug)]
pub struct ExpandArgs {
    /// AsciiDoc page to expand.
    pub page: PathBuf,

    #[command(flatten)]
    pub build: BuildArgs,

    /// Write the expanded page here instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ExpandArgs {
    pub fn run(self) -> Result<()> {
        let config = self.build.resolve()?;
        let mut extension = self.build.extension(&config)?;

        let source = std::fs::read_to_string(&self.page)
            .with_context(|| format!("cannot read page '{}'", self.page.display()))?;
        let expanded = expand_page(&mut extension, &source, &config.attributes)
            .with_context(|| format!("failed to expand '{}'", self.page.display()))?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, &expanded.source)
                    .with_context(|| format!("cannot write '{}'", path.display()))?;
                eprintln!(
                    "{} expanded {} live demo(s) into {}",
                    "✓".green().bold(),
                    expanded.demos.len(),
                    path.display()
                );
                for id in &expanded.demos {
                    eprintln!("  ·  {id}");
                }
            }
            None => print!("{}", expanded.source),
        }
        Ok(())
    }
}
