mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ecad",
    version,
    about = "Extract royalty distribution tables from PDF statements"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the report layout of one or more PDF (or pre-extracted .txt) files
    Classify {
        /// Paths to PDF or text files
        #[arg(required = true)]
        input_files: Vec<PathBuf>,

        /// Built-in layout profile: default, pt-br
        #[arg(short, long, default_value = "default", conflicts_with = "profile")]
        preset: String,

        /// Custom JSON layout profile
        #[arg(long, value_name = "FILE")]
        profile: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Classify and extract records from one or more reports
    Extract {
        /// Paths to PDF or text files
        #[arg(required = true)]
        input_files: Vec<PathBuf>,

        /// Built-in layout profile: default, pt-br
        #[arg(short, long, default_value = "default", conflicts_with = "profile")]
        preset: String,

        /// Custom JSON layout profile
        #[arg(long, value_name = "FILE")]
        profile: Option<PathBuf>,

        /// Output format: table (default), json or csv
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write numbers as 1.234,56 (CSV then uses ';' as delimiter)
        #[arg(long)]
        national: bool,

        /// Write one <name>_DATA.csv (or .json) file per input into DIR
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
    /// Inspect and validate layout profiles
    Profiles {
        #[command(subcommand)]
        action: ProfilesAction,
    },
}

#[derive(Subcommand)]
enum ProfilesAction {
    /// List built-in layout profiles
    List,
    /// Print a built-in profile as JSON
    Show {
        /// Preset name (e.g., "default")
        preset: String,
    },
    /// Validate a custom profile file against its own examples
    Validate {
        /// Path to JSON profile file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();

    let result = match cli.command {
        Commands::Classify {
            input_files,
            preset,
            profile,
            output,
        } => commands::load_engine(&preset, profile.as_deref())
            .and_then(|engine| commands::classify::run(&input_files, &engine, &output)),
        Commands::Extract {
            input_files,
            preset,
            profile,
            output,
            national,
            out_dir,
        } => commands::load_engine(&preset, profile.as_deref()).and_then(|engine| {
            commands::extract::run(&input_files, &engine, &output, national, out_dir.as_deref())
        }),
        Commands::Profiles { action } => match action {
            ProfilesAction::List => commands::profiles::list(),
            ProfilesAction::Show { preset } => commands::profiles::show(&preset),
            ProfilesAction::Validate { file } => commands::profiles::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
