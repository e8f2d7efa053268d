// ABOUTME: CLI binary for the blogfix page maintenance tools.
// ABOUTME: Runs the corruption scrubber, the FAQ converter, or the card generator.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use blogfix_fixes::{
    blog_pages, render_cards, run_fix, ConvertFaqs, FileOutcome, PageFix, RunReport,
    ScrubCorruption, DEFAULT_BLOG_DIR, PUBLISHED_POSTS,
};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "blogfix")]
#[command(about = "Batch maintenance for the blog's static HTML pages")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Strip leftover script fragments out of post pages
    Scrub(RunArgs),
    /// Convert legacy Q:/A: markup into dropdown widgets
    Faqs(RunArgs),
    /// Generate the premium card markup for the blog index
    Cards {
        /// Output file for the rendered fragment
        #[arg(short = 'o', long = "output", default_value = "premium_cards.html")]
        output: PathBuf,
    },
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Blog directory holding the post pages
    #[arg(long = "dir", default_value = DEFAULT_BLOG_DIR)]
    dir: PathBuf,

    /// Output the run report as JSON instead of the banner format
    #[arg(long = "json")]
    json: bool,

    /// Print elapsed time in ms to stderr
    #[arg(long = "timing")]
    timing: bool,
}

/// Console wording that differs between the two rewrite passes.
struct Wording {
    tool: &'static str,
    banner: &'static str,
    changed_tag: &'static str,
    changed_label: &'static str,
}

const SCRUB_WORDING: Wording = Wording {
    tool: "scrub",
    banner: "Cleaning Corrupted Blog Post Files",
    changed_tag: "CLEANED",
    changed_label: "Cleaned",
};

const FAQS_WORDING: Wording = Wording {
    tool: "faqs",
    banner: "Converting FAQs to Dropdown Style",
    changed_tag: "OK",
    changed_label: "Converted",
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let had_error = match run(cli) {
        Ok(had_error) => had_error,
        Err(e) => {
            eprintln!("error: {:#}", e);
            true
        }
    };

    if had_error {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    match cli.command {
        Command::Scrub(args) => run_pass(&args, &ScrubCorruption, &SCRUB_WORDING),
        Command::Faqs(args) => run_pass(&args, &ConvertFaqs, &FAQS_WORDING),
        Command::Cards { output } => {
            run_cards(&output)?;
            Ok(false)
        }
    }
}

fn run_pass(args: &RunArgs, fix: &dyn PageFix, wording: &Wording) -> anyhow::Result<bool> {
    let start = Instant::now();

    let pages = blog_pages(&args.dir)
        .with_context(|| format!("listing blog directory {}", args.dir.display()))?;
    let report = run_fix(&pages, fix);

    if args.json {
        let json = serde_json::json!({
            "tool": wording.tool,
            "report": report,
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        print_report(&report, wording);
    }

    if args.timing {
        let _ = writeln!(io::stderr(), "elapsed: {}ms", start.elapsed().as_millis());
    }

    Ok(report.errors > 0)
}

fn print_report(report: &RunReport, wording: &Wording) {
    println!("\n=== {} ===\n", wording.banner);

    for entry in &report.entries {
        match &entry.outcome {
            FileOutcome::Changed => println!("  [{}] {}", wording.changed_tag, entry.file),
            FileOutcome::Skipped { reason } => println!("  [SKIP] {} - {}", entry.file, reason),
            FileOutcome::Failed { error } => println!("  [ERROR] {} - {}", entry.file, error),
        }
    }

    println!("\n=== Summary ===");
    println!("{}: {} files", wording.changed_label, report.changed);
    println!("Skipped: {} files", report.skipped);
    println!("Errors: {} files", report.errors);
    println!("\nDone!\n");
}

fn run_cards(output: &Path) -> anyhow::Result<()> {
    let fragment = render_cards(PUBLISHED_POSTS);
    fs::write(output, &fragment)
        .with_context(|| format!("writing cards to {}", output.display()))?;

    println!("Premium cards generated successfully!");
    println!("Total cards: {}", PUBLISHED_POSTS.len());
    println!("Saved to {}", output.display());
    Ok(())
}
