mod commands;
mod logging;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "suncheck",
    version,
    about = "Extract linac QA measurements from SunCheck PDF reports"
)]
struct Cli {
    /// Log progress (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract measurements from a directory of reports (or listed PDFs) into JSON
    Extract {
        /// Directory of "<Month> <day>.pdf" reports, or the PDF files themselves
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Write JSON to this file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Custom classification table (JSON)
        #[arg(short, long, value_name = "FILE")]
        table: Option<PathBuf>,
    },
    /// Show how every line of one report is classified
    Inspect {
        /// Path to a PDF report
        input_file: PathBuf,

        /// Custom classification table (JSON)
        #[arg(short, long, value_name = "FILE")]
        table: Option<PathBuf>,

        /// Also list lines that are skipped
        #[arg(long)]
        show_all: bool,
    },
    /// Print the default classification table as JSON
    Table,
}

fn main() {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    let result = match cli.command {
        Commands::Extract { inputs, out, table } => commands::extract::run(inputs, out, table),
        Commands::Inspect {
            input_file,
            table,
            show_all,
        } => commands::inspect::run(input_file, table, show_all),
        Commands::Table => commands::table::print_default(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
