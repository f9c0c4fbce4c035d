use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rankratioviz::{
    commands::{rrv_params, rrv_validate_rank, rrv_validate_sample, rrv_validate_schema},
    params,
    prelude::{RankRatiovizError, Tolerance},
    reporting::Report,
    tolerance::{DEFAULT_ABSOLUTE_TOLERANCE, DEFAULT_RELATIVE_TOLERANCE},
};

const INFO: &str = "\
rankratioviz: checks for rankratioviz rank and sample plots
usage: rankratioviz [--help] <subcommand>

Subcommands:

  validate-rank: check a rank plot against the ranks file it was drawn from.
  validate-sample: check the chart-level properties of a sample plot.
  validate-schema: check that a plot has a Vega-Lite $schema.
  params: print the descriptions of the rankratioviz parameters.

";

#[derive(Parser)]
#[clap(name = "rankratioviz")]
#[clap(about = INFO)]
struct Cli {
    /// increase logging verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    ValidateRank {
        /// a comma-separated ranks file, with a header line and feature IDs in the first column
        #[arg(long, required = true)]
        ranks: PathBuf,

        /// the rank plot Vega-Lite JSON file
        #[arg(long, required = true)]
        plot: PathBuf,

        /// the zero-based column of the ranks file holding the ranks shown in the plot
        #[arg(long, required = true)]
        rank_column: usize,

        /// relative tolerance when comparing rank values
        #[arg(long, default_value_t = DEFAULT_RELATIVE_TOLERANCE)]
        rel_tol: f64,

        /// absolute tolerance when comparing rank values
        #[arg(long, default_value_t = DEFAULT_ABSOLUTE_TOLERANCE)]
        abs_tol: f64,
    },
    ValidateSample {
        #[arg(long, required = true, help = params::TABLE)]
        table: PathBuf,

        /// the sample metadata file
        #[arg(long, required = true)]
        metadata: PathBuf,

        /// the sample plot Vega-Lite JSON file
        #[arg(long, required = true)]
        plot: PathBuf,
    },
    ValidateSchema {
        /// a Vega-Lite JSON file
        #[arg(required = true)]
        plot: PathBuf,
    },
    Params {
        /// only print this parameter (e.g. TABLE or --extreme-feature-count)
        name: Option<String>,
    },
}

fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

fn print_report(report: &Report) {
    if !report.is_empty() {
        eprint!("{}", report);
    }
}

fn run() -> Result<(), RankRatiovizError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Some(Commands::ValidateRank {
            ranks,
            plot,
            rank_column,
            rel_tol,
            abs_tol,
        }) => {
            let tolerance = Tolerance::new(*rel_tol, *abs_tol);
            let output = rrv_validate_rank(ranks, plot, *rank_column, &tolerance)?;
            print_report(output.report());
            println!("rank plot OK ({} features)", output.value());
        }
        Some(Commands::ValidateSample {
            table,
            metadata,
            plot,
        }) => {
            let output = rrv_validate_sample(table, metadata, plot)?;
            print_report(output.report());
            println!("sample plot OK");
        }
        Some(Commands::ValidateSchema { plot }) => {
            rrv_validate_schema(plot)?;
            println!("schema OK");
        }
        Some(Commands::Params { name }) => {
            let output = rrv_params(name.as_deref())?;
            for (name, description) in output.value() {
                println!("{}\n    {}\n", name, description);
            }
        }
        None => {
            println!("{}\n", INFO);
            std::process::exit(1);
        }
    }
    Ok(())
}

fn main() {
    match run() {
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
