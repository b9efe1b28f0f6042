// ABOUTME: Main entry point for the weekly-deck program.
// ABOUTME: Provides CLI interface and executes commands from the library.

use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a weekly report PPTX from a markdown status file
    Generate(GenerateArgs),

    /// Append a session summary to the work log
    LogSession,
}

#[derive(Args)]
struct GenerateArgs {
    /// Week number shown on the title slide
    week_number: String,

    /// Path to the markdown status file
    input: PathBuf,

    /// Path to the output PPTX file
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let config = weekly_deck::Config::from_env();

    let result = match &cli.command {
        Commands::Generate(args) => generate(args, &config),
        Commands::LogSession => {
            let result = weekly_deck::log_session(&config);
            if result.is_ok() {
                println!("✓ Logged session to {}", config.work_log_path.display());
            }
            result
        }
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn generate(args: &GenerateArgs, config: &weekly_deck::Config) -> weekly_deck::Result<()> {
    weekly_deck::utils::validate_file_exists(&args.input)?;
    let markdown = fs::read_to_string(&args.input)?;

    let tasks = weekly_deck::parse(&markdown);
    let deck = weekly_deck::build_deck(&args.week_number, &tasks, config);
    weekly_deck::write_pptx(&deck, &args.output)?;

    println!("✓ Generated: {}", args.output.display());
    println!(
        "✓ Total slides: {} (1 title + {} task slides)",
        deck.slides.len(),
        tasks.len()
    );
    println!("✓ {}", weekly_deck::typography_summary());
    Ok(())
}
