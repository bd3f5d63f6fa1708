use anyhow::Result;
use clap::Parser;

use warden::{Pattern, PatternReport, Variant};

mod cli;
use cli::display::{self, dim, heading, key, outcome_line, variant_badge};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Ok(true) means the run finished but should exit non-zero.
    let result = match cli.command {
        Commands::Demo { pattern, json } => run(Variant::Safe, pattern, json).map(|_| false),
        Commands::Avoid {
            pattern,
            json,
            strict,
        } => run(Variant::Avoided, pattern, json).map(|failed| strict && failed > 0),
        Commands::List => {
            list_patterns();
            Ok(false)
        }
    };

    match result {
        Ok(false) => {}
        Ok(true) => std::process::exit(1),
        Err(e) => {
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Run the selected patterns and print them. Returns how many failed.
fn run(variant: Variant, only: Option<Pattern>, json: bool) -> Result<usize> {
    let reports: Vec<(usize, PatternReport)> = Pattern::ALL
        .into_iter()
        .enumerate()
        .filter(|(_, p)| only.map_or(true, |o| o == *p))
        .map(|(i, p)| (i + 1, p.report(variant)))
        .collect();

    let failed = reports.iter().filter(|(_, r)| r.failure.is_some()).count();

    if json {
        print_json(&reports)?;
    } else {
        for (number, report) in &reports {
            print_report(*number, report);
        }
    }

    Ok(failed)
}

#[cfg(feature = "serde_json")]
fn print_json(reports: &[(usize, PatternReport)]) -> Result<()> {
    use anyhow::Context;

    let reports: Vec<&PatternReport> = reports.iter().map(|(_, r)| r).collect();
    let out = serde_json::to_string_pretty(&reports).context("serialize report")?;
    println!("{}", out);
    Ok(())
}

#[cfg(not(feature = "serde_json"))]
fn print_json(_reports: &[(usize, PatternReport)]) -> Result<()> {
    anyhow::bail!("JSON output requires the `serde_json` feature")
}

fn print_report(number: usize, report: &PatternReport) {
    display::section_top(&heading(number, report.title));
    display::row(&format!(
        "{} {}",
        variant_badge(report.variant),
        dim(report.pattern.name())
    ));
    for line in &report.lines {
        display::row(line);
    }
    display::row(&outcome_line(report.failure.as_deref()));
    display::section_bot();
}

fn list_patterns() {
    for (i, pattern) in Pattern::ALL.into_iter().enumerate() {
        let name = key(pattern.name());
        let pad = 24usize.saturating_sub(display::visible_len(&name));
        println!(
            "{:>2}. {}{} {}",
            i + 1,
            name,
            " ".repeat(pad),
            dim(pattern.title(Variant::Safe))
        );
    }
}
