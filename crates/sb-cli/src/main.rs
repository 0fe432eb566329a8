//! CLI frontend for SpecBook, specification-driven development for books.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use sb_core::{BookConfig, RecordFormat};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "specbook",
    about = "SpecBook — specification-driven development for books",
    version,
    propagate_version = true
)]
struct Cli {
    /// Format of spec files
    #[arg(long, value_enum, global = true, default_value = "yaml")]
    format: FormatArg,

    /// Answers allowed when picking an entity interactively
    #[arg(long, global = true, default_value = "3")]
    attempts: u32,

    /// Log more (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Yaml,
    Json,
}

impl From<FormatArg> for RecordFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Yaml => RecordFormat::Yaml,
            FormatArg::Json => RecordFormat::Json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a project directory tree with a seed spec
    Init {
        /// Project directory
        path: PathBuf,
    },

    /// Write a new character or setting spec
    Specify {
        /// Project directory
        #[arg(short, long)]
        project: PathBuf,

        #[command(subcommand)]
        entity: SpecifyEntity,
    },

    /// Generate writing fragments from specs
    Generate {
        /// Project directory
        #[arg(short, long)]
        project: PathBuf,

        /// Fragment kind (e.g. scene)
        kind: String,

        /// Character name (skips interactive selection)
        #[arg(short, long)]
        character: Option<String>,

        /// Setting name (skips interactive selection)
        #[arg(short, long)]
        setting: Option<String>,
    },
}

#[derive(Subcommand)]
enum SpecifyEntity {
    /// The book idea in the seed spec
    Seed {
        /// One or two sentences describing the book (asked if omitted)
        #[arg(short, long)]
        description: Option<String>,
    },

    /// A character with a desire and a fear (missing fields are asked)
    Character {
        /// Character name
        #[arg(short, long)]
        name: Option<String>,

        /// What the character wants
        #[arg(short, long)]
        desire: Option<String>,

        /// What the character fears
        #[arg(short, long)]
        fear: Option<String>,
    },

    /// A setting with a mood (missing fields are asked)
    Setting {
        /// Setting name
        #[arg(short, long)]
        name: Option<String>,

        /// Atmosphere of the place
        #[arg(short, long)]
        mood: Option<String>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = BookConfig::default()
        .with_format(cli.format.into())
        .with_max_attempts(cli.attempts);

    let result = match cli.command {
        Commands::Init { path } => commands::init::run(&path, &config),
        Commands::Specify { project, entity } => match entity {
            SpecifyEntity::Seed { description } => {
                commands::specify::seed(&project, &config, description.as_deref())
            }
            SpecifyEntity::Character { name, desire, fear } => {
                commands::specify::character(&project, &config, name, desire, fear)
            }
            SpecifyEntity::Setting { name, mood } => {
                commands::specify::setting(&project, &config, name, mood)
            }
        },
        Commands::Generate {
            project,
            kind,
            character,
            setting,
        } => commands::generate::run(&project, &config, kind, character, setting),
    };

    match result {
        Ok(message) => println!("{} {message}", "✔".green()),
        Err(e) => {
            eprintln!("{} {e}", "✖".red());
            process::exit(1);
        }
    }
}
