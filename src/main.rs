use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use owo_colors::OwoColorize;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use matchday_ratings::archive::{self, MatchFilter};
use matchday_ratings::compose::{ComposeOptions, Composer};
use matchday_ratings::config::{self, Config};
use matchday_ratings::formation::FormationTable;
use matchday_ratings::output;
use matchday_ratings::stats::{compile_responses, Compilation};
use matchday_ratings::storage;

const EXIT_SUCCESS: i32 = 0;
const EXIT_DATA: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile survey responses into results.json
    Compile {
        /// Match id (directory name under data_dir)
        match_id: u64,
        /// Responses export (defaults to <data_dir>/<match_id>/responses.json)
        #[arg(long)]
        responses: Option<PathBuf>,
    },
    /// Print the results graphic as a JSON display list
    Layout {
        match_id: u64,
        /// Quote of the match
        #[arg(long)]
        quote: Option<String>,
        /// Photo of the match
        #[arg(long)]
        photo: Option<String>,
        /// Also save the display list to <data_dir>/<match_id>/layout.json
        #[arg(long)]
        save: bool,
    },
    /// Rebuild the results archive from data_dir
    BuildArchive,
    /// List compiled matches, most recent first
    List {
        #[arg(long)]
        opponent: Option<String>,
        #[arg(long)]
        competition: Option<String>,
        /// Earliest date, inclusive (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Latest date, inclusive (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
    /// Show the effective formation table
    Formations,
}

#[derive(Parser, Debug)]
#[command(name = "matchday-ratings")]
#[command(about = "Compile fan match ratings and lay out the results graphic", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/matchday-ratings/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();
    let start_time = Instant::now();

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate config at startup
    if let Err(errors) = config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let table = match config::formation_table(&config) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let outcome = match cli.command {
        Commands::Compile {
            match_id,
            responses,
        } => run_compile(&config, match_id, responses),
        Commands::Layout {
            match_id,
            quote,
            photo,
            save,
        } => run_layout(&config, &table, match_id, quote, photo, save),
        Commands::BuildArchive => run_build_archive(&config),
        Commands::List {
            opponent,
            competition,
            from,
            to,
        } => run_list(
            &config,
            &MatchFilter {
                opponent,
                competition,
                date_from: from,
                date_to: to,
            },
        ),
        Commands::Formations => {
            println!("{}", output::format_formations(&table));
            Ok(())
        }
    };

    if let Err(e) = outcome {
        eprintln!("Error: {:#}", e);
        std::process::exit(EXIT_DATA);
    }

    if cli.verbose {
        eprintln!("Done in {:?}", start_time.elapsed());
    }
    std::process::exit(EXIT_SUCCESS);
}

fn run_compile(config: &Config, match_id: u64, responses: Option<PathBuf>) -> Result<()> {
    let match_dir = config.match_dir(match_id);
    let match_data = storage::load_match_data(&storage::match_data_path(&match_dir))?;
    let responses_path = responses.unwrap_or_else(|| match_dir.join(storage::RESPONSES_FILE));
    let responses = storage::load_responses(&responses_path)?;

    match compile_responses(&responses, &match_data, &config.club_name) {
        Compilation::ZeroResponses { match_id } => {
            eprintln!("No responses for match {}, nothing compiled.", match_id);
        }
        Compilation::Compiled(result) => {
            let path = storage::results_path(&match_dir);
            storage::save_result(&path, &result)?;
            println!(
                "{}",
                output::format_compile_summary(&result, output::should_use_colors())
            );
            log::info!("Results saved to {}", path.display());
        }
    }
    Ok(())
}

fn run_layout(
    config: &Config,
    table: &FormationTable,
    match_id: u64,
    quote: Option<String>,
    photo: Option<String>,
    save: bool,
) -> Result<()> {
    let match_dir = config.match_dir(match_id);
    let result = storage::load_result(&storage::results_path(&match_dir))?;
    let assets = config::asset_catalog(config)?;

    let options = ComposeOptions {
        club_label: config.club_label.clone(),
        quote,
        photo,
    };
    let composition = Composer::new(table, &assets).compose(&result, &options);

    for warning in &composition.warnings {
        if output::should_use_colors() {
            eprintln!("{} {}", "warning:".yellow(), warning);
        } else {
            eprintln!("warning: {}", warning);
        }
    }

    if save {
        let layout_path = match_dir.join(storage::LAYOUT_FILE);
        storage::write_json(&layout_path, &composition.display_list)?;
    }

    let json = composition
        .display_list
        .to_json()
        .context("Failed to serialize display list")?;
    println!("{}", json);
    Ok(())
}

fn run_build_archive(config: &Config) -> Result<()> {
    let report = archive::build_archive(&config.data_dir, &config.archive_dir)?;
    println!(
        "{}",
        output::format_match_list(&report.indexed, output::should_use_colors())
    );
    for (name, reason) in &report.skipped {
        eprintln!("Skipped {}: {}", name, reason);
    }
    Ok(())
}

fn run_list(config: &Config, filter: &MatchFilter) -> Result<()> {
    let mut documents = Vec::new();
    if config.data_dir.is_dir() {
        for entry in fs::read_dir(&config.data_dir)
            .with_context(|| format!("Failed to list {}", config.data_dir.display()))?
        {
            let path = entry?.path();
            let results = storage::results_path(&path);
            if let Ok(text) = fs::read_to_string(&results) {
                documents.push((results.display().to_string(), text));
            }
        }
    }

    let listing = archive::summarize_documents(
        documents.iter().map(|(name, text)| (name.as_str(), text.as_str())),
    );
    let sorted = archive::sort_matches(listing.matches);
    let shown: Vec<_> = archive::filter_matches(&sorted, filter)
        .into_iter()
        .cloned()
        .collect();

    println!(
        "{}",
        output::format_match_list(&shown, output::should_use_colors())
    );
    if !listing.skipped.is_empty() {
        let skipped = listing.skipped.len();
        eprintln!("{} unreadable result file(s) skipped", skipped);
    }
    Ok(())
}
