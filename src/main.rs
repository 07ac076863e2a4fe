use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

use argman::markup::ActionView;
use argman::{render_model, HelpModel};

#[derive(Parser, Debug)]
#[command(
    name = "argman",
    version,
    about = "Generate man pages from argument-parser help models"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a help model JSON file as a man page
    Render(RenderArgs),
    /// Validate a help model and summarize its contents
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Path to the help model JSON
    #[arg(long, value_name = "PATH")]
    model: PathBuf,

    /// Output path for the rendered page (stdout when omitted)
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,

    /// Header date override (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    date: Option<String>,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Path to the help model JSON
    #[arg(long, value_name = "PATH")]
    model: PathBuf,

    /// Emit machine-readable JSON output
    #[arg(long)]
    json: bool,
}

/// Check summary, also emitted as JSON with `--json`.
#[derive(Serialize)]
struct ModelSummary {
    schema_version: u32,
    prog: String,
    groups: usize,
    actions: usize,
    extra_sections: usize,
    warnings: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Render(args) => cmd_render(args),
        Commands::Check(args) => cmd_check(args),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let mut model = read_model(&args.model)?;
    if let Some(date) = args.date {
        model.date = Some(date);
    }
    let page = render_model(&model)
        .with_context(|| format!("render help model {}", args.model.display()))?;

    match &args.out {
        Some(out) => {
            std::fs::write(out, format!("{page}\n"))
                .with_context(|| format!("write man page {}", out.display()))?;
            println!("Wrote man page to {}", out.display());
        }
        None => println!("{page}"),
    }
    Ok(())
}

fn cmd_check(args: CheckArgs) -> Result<()> {
    let model = read_model(&args.model)?;

    let mut warnings = Vec::new();
    let mut actions = 0usize;
    for group in &model.groups {
        for action in &group.actions {
            actions += 1;
            if let Err(err) = ActionView::new(action).invocation() {
                warnings.push(format!("group {:?}: {err}", group.title));
            }
        }
    }

    let summary = ModelSummary {
        schema_version: 1,
        prog: model.prog.clone(),
        groups: model.groups.len(),
        actions,
        extra_sections: model.extra_sections.len(),
        warnings,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("prog: {}", summary.prog);
        println!("groups: {}", summary.groups);
        println!("actions: {}", summary.actions);
        println!("extra sections: {}", summary.extra_sections);
        for warning in &summary.warnings {
            println!("warning: {warning}");
        }
    }

    if !summary.warnings.is_empty() {
        bail!("help model has {} unrenderable actions", summary.warnings.len());
    }
    Ok(())
}

fn read_model(path: &Path) -> Result<HelpModel> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read help model {}", path.display()))?;
    let model = serde_json::from_str(&content)
        .with_context(|| format!("parse help model {}", path.display()))?;
    Ok(model)
}
