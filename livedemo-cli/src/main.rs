//! livedemo — render TinyMCE live demo blocks from a documentation catalog.
//!
//! # Usage
//!
//! ```text
//! livedemo render <demo-id> [--config FILE] [--catalog DIR] [--wrapper FILE] [--attr k=v]... [--demo-attr k=v]... [--json]
//! livedemo expand <page.adoc> [--config FILE] [--catalog DIR] [--wrapper FILE] [--attr k=v]... [--output FILE]
//! livedemo list [--catalog DIR] [--component C] [--component-version V] [--module M] [--json]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{expand::ExpandArgs, list::ListArgs, render::RenderArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "livedemo",
    version,
    about = "Render interactive live demo blocks for AsciiDoc documentation",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render one demo as an AsciiDoc open block.
    Render(RenderArgs),

    /// Expand every liveDemo macro in an AsciiDoc page.
    Expand(ExpandArgs),

    /// List the demos a module provides.
    List(ListArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Render(args) => args.run(),
        Commands::Expand(args) => args.run(),
        Commands::List(args) => args.run(),
    }
}
