use anyhow::{Context, Result};
use clap::Parser;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Input};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use florakey::{Engine, MemoryKnowledgeBase, SessionState};

mod render;

/// Interactive wildflower identification from free-text descriptions.
#[derive(Parser)]
#[command(name = "flora", version, about)]
struct Args {
    /// Path to a species dataset (JSON). Defaults to the bundled
    /// Wisconsin Rubiaceae dataset.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

const BUNDLED_DATASET: &str = include_str!("../data/rubiaceae_wi.json");

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let dataset = match &args.data {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset {}", path.display()))?,
        None => BUNDLED_DATASET.to_string(),
    };
    let base = MemoryKnowledgeBase::from_json(&dataset).context("Failed to load dataset")?;

    let term = Term::stdout();
    render::banner(&term, base.species_count())?;

    let engine = Engine::new(base);
    let mut state = SessionState::new();

    println!("{}", florakey::prompt(florakey::AttributeKind::Color));
    println!();

    loop {
        let line: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(">")
            .allow_empty(true)
            .interact_text()?;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
            render::farewell();
            break;
        }

        let report = engine.process_turn(&mut state, trimmed).await?;
        println!();
        render::turn(&report);
        println!();

        if report.outcome().is_some() {
            break;
        }
    }

    Ok(())
}

fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "florakey=debug,info",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
