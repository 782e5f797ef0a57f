mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::amortization::{PaymentArgs, ScheduleArgs, SummaryArgs};

/// Loan amortization schedules and summaries
#[derive(Parser)]
#[command(
    name = "amort",
    version,
    about = "Loan amortization schedules and summaries",
    long_about = "A CLI for amortizing fixed-rate loans with decimal precision. \
                  Computes level payments, month-by-month schedules, and \
                  point-in-time summaries, all in integer cents."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the fixed monthly payment for a loan
    Payment(PaymentArgs),
    /// Generate the full month-by-month amortization schedule
    Schedule(ScheduleArgs),
    /// Summarize principal and interest paid through a given month
    Summary(SummaryArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Payment(args) => commands::amortization::run_payment(args),
        Commands::Schedule(args) => commands::amortization::run_schedule(args),
        Commands::Summary(args) => commands::amortization::run_summary(args),
        Commands::Version => {
            println!("amort {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
