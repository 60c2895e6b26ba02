//! Pip Preview
//!
//! Render a circle page indicator for a paging scenario and print the
//! resulting circles, for checking styles without a running UI host.
//!
//! Usage:
//!   pip-preview render --pages 5 --current 2 --offset 120
//!   pip-preview render --pages 5 --style indicator.toml --json
//!   pip-preview style > indicator.toml

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pip_theme::IndicatorStyle;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod preview;
mod sim_pager;

use preview::PreviewRequest;

#[derive(Parser)]
#[command(name = "pip-preview")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Preview Pip page indicators", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an indicator and print its circles
    Render {
        /// Number of pages
        #[arg(short, long, default_value = "5")]
        pages: usize,

        /// Page to move the pager to
        #[arg(short, long, default_value = "0")]
        current: usize,

        /// Drag offset into the next page, in pixels
        #[arg(short, long, default_value = "0")]
        offset: i32,

        /// Width of one page, in pixels
        #[arg(long, default_value = "320")]
        page_width: i32,

        /// Width available to the indicator, in pixels
        #[arg(short, long, default_value = "320")]
        width: u32,

        /// Style file (TOML)
        #[arg(short, long)]
        style: Option<PathBuf>,

        /// Force snap mode on
        #[arg(long)]
        snap: bool,

        /// Force left alignment
        #[arg(long)]
        left: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the default indicator style as TOML
    Style,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG overrides the verbosity flag
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Render {
            pages,
            current,
            offset,
            page_width,
            width,
            style,
            snap,
            left,
            json,
        } => {
            let style = match style {
                Some(path) => IndicatorStyle::load_from_file(&path)
                    .with_context(|| format!("Failed to load style {}", path.display()))?,
                None => IndicatorStyle::default(),
            };
            let request = PreviewRequest {
                pages,
                current,
                offset_px: offset,
                page_width_px: page_width,
                view_width: width,
                snap: snap.then_some(true),
                centered: left.then_some(false),
                style,
            };
            cmd_render(&request, json)
        }
        Commands::Style => cmd_style(),
    }
}

fn cmd_render(request: &PreviewRequest, json: bool) -> Result<()> {
    tracing::info!(
        pages = request.pages,
        current = request.current,
        offset_px = request.offset_px,
        "Rendering indicator preview"
    );
    let preview = preview::render(request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&preview)?);
    } else {
        print!("{}", preview.to_text());
    }
    Ok(())
}

fn cmd_style() -> Result<()> {
    let text = IndicatorStyle::default()
        .to_toml_string()
        .context("Failed to serialize default style")?;
    print!("{text}");
    Ok(())
}
