//! Terminal output for the identification session.

use anyhow::Result;
use colored::Colorize;
use console::Term;
use florakey::{prompt, Outcome, TurnReport};

pub fn banner(term: &Term, species_count: usize) -> Result<()> {
    term.clear_screen()?;
    println!(
        "{}",
        "╔════════════════════════════════════════╗".bright_green()
    );
    println!(
        "{}",
        "║        🌼  Flora Key  🌼               ║".bright_green()
    );
    println!(
        "{}",
        "╚════════════════════════════════════════╝".bright_green()
    );
    println!();
    println!(
        "Describe the plant in your own words and I will narrow down which of \
         the {} species it is.",
        species_count.to_string().bright_yellow()
    );
    println!("{}", "Type 'quit' to give up.".dimmed());
    println!();
    Ok(())
}

/// Print what one turn did: which attributes landed, how many candidates
/// remain, and the next question if the session is still open.
pub fn turn(report: &TurnReport) {
    if report.applied.is_empty() {
        println!(
            "{}",
            "I couldn't pick out anything new from that.".dimmed()
        );
    } else {
        let used: Vec<&str> = report.applied.iter().map(|kind| kind.label()).collect();
        println!(
            "Noted: {}",
            used.join(", ").bright_cyan()
        );
    }

    match report.outcome() {
        Some(Outcome::Match(species)) => {
            println!();
            println!(
                "{} {}",
                "✅ It looks like:".bright_green().bold(),
                species.to_string().bright_green().bold().italic()
            );
        }
        Some(Outcome::NoMatch) => {
            println!();
            println!(
                "{}",
                "❌ Nothing I know of matches that combination. It may be a species I haven't learned yet."
                    .bright_red()
            );
        }
        None => {
            println!(
                "{} candidate species remain.",
                report.candidates.len().to_string().bright_yellow()
            );
            match report.next_question {
                Some(kind) => {
                    println!();
                    println!("{}", prompt(kind).bright_blue());
                }
                None => {
                    println!();
                    println!(
                        "{}",
                        "I'm out of questions, but you can keep describing the plant:".bright_blue()
                    );
                    for species in &report.candidates {
                        println!("  - {}", species.to_string().italic());
                    }
                }
            }
        }
    }
}

pub fn farewell() {
    println!("{}", "👋 Happy botanizing!".bright_blue());
}
