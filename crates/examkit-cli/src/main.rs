//! examkit CLI — author exams as a teacher, take them as a student.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod prompt;

#[derive(Parser)]
#[command(
    name = "examkit",
    version,
    about = "Author and take single-choice exams"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding exam files (overrides config and EXAMKIT_BASE_DIR)
    #[arg(long, global = true)]
    base_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Author a new exam, reading questions from stdin
    Create {
        /// Exam kind: practice or final
        #[arg(long, default_value = "practice")]
        kind: String,

        /// Exam name (stored as <name>.txt)
        #[arg(long)]
        name: String,

        /// Duration in minutes
        #[arg(long)]
        duration: f64,
    },

    /// Load an exam from disk and display it
    Take {
        /// Exam kind: practice reveals correct answers, final does not
        #[arg(long, default_value = "practice")]
        kind: String,

        /// Exam name to load
        #[arg(long)]
        name: String,
    },

    /// List stored exams
    List {
        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Create a starter config and the configured exam directory
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("examkit=info".parse().expect("static directive")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Create {
            kind,
            name,
            duration,
        } => commands::load_config(cli.config, cli.base_dir)
            .and_then(|config| commands::create::execute(&config, kind, name, duration)),
        Commands::Take { kind, name } => commands::load_config(cli.config, cli.base_dir)
            .and_then(|config| commands::take::execute(&config, kind, name)),
        Commands::List { format } => commands::load_config(cli.config, cli.base_dir)
            .and_then(|config| commands::list::execute(&config, format)),
        Commands::Init => commands::load_config(cli.config, cli.base_dir)
            .and_then(|config| commands::init::execute(&config)),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
