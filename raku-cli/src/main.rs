//! Raku CLI - Read graded Japanese stories from the terminal

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::Context;
use raku_core::ReaderConfig;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "raku")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Story data file
    #[arg(long, global = true, env = "RAKU_DATA", default_value = "data/stories.json")]
    data: PathBuf,

    /// Discussion topics file
    #[arg(
        long,
        global = true,
        env = "RAKU_DISCUSSIONS",
        default_value = "data/discussions.json"
    )]
    discussions: PathBuf,

    /// Level kept out of story numbering and prev/next links ("none" to disable)
    #[arg(long, global = true)]
    exclude_tier: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List stories, easiest first
    List {
        /// Level group, e.g. "Level 1-3", "N4" or "All"
        #[arg(short, long, default_value = "All")]
        level: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a story
    Show {
        /// Story id
        id: String,

        /// Include the English translation
        #[arg(short, long)]
        translation: bool,

        /// Hide furigana readings in the story text
        #[arg(long)]
        no_furigana: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Answer a story's quiz (choices read from stdin, one per line, 1-based)
    Quiz {
        /// Story id
        id: String,
    },

    /// Print the text the speech synthesizer would read
    Speech {
        /// Story id
        id: String,
    },

    /// Show the discussion topic of the day
    Today {
        /// Date to use instead of today (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<chrono::NaiveDate>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the level groups and how many stories each holds
    Groups,

    /// Validate story data files
    Validate {
        /// Story files to check (defaults to --data)
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "raku_cli=debug,raku_core=debug"
    } else {
        "raku_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = ReaderConfig::from_env();
    if cli.exclude_tier.is_some() {
        config = config.with_excluded_tier(cli.exclude_tier);
    }

    let ctx = Context {
        config,
        data: cli.data,
        discussions: cli.discussions,
    };

    match cli.command {
        Commands::List { level, json } => commands::list(&ctx, &level, json),

        Commands::Show {
            id,
            translation,
            no_furigana,
            json,
        } => commands::show(&ctx, &id, translation, !no_furigana, json),

        Commands::Quiz { id } => commands::quiz(&ctx, &id),

        Commands::Speech { id } => commands::speech(&ctx, &id),

        Commands::Today { date, json } => commands::today(&ctx, date, json),

        Commands::Groups => commands::groups(&ctx),

        Commands::Validate { files } => commands::validate(&ctx, files),
    }
}
