use clap::{Parser, Subcommand};

mod commands;

use commands::{currency, duplicates, fibonacci, merge, stats, temperature, text, validate};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "toolbelt")]
#[command(version = VERSION)]
#[command(about = "Utility toolkit for common validation, text, and numeric operations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate emails and phone numbers
    Validate(validate::ValidateArgs),
    /// Generate leading terms of the Fibonacci sequence
    Fibonacci(fibonacci::FibonacciArgs),
    /// Word-level text operations
    Text(text::TextArgs),
    /// Report values that appear more than once
    Duplicates(duplicates::DuplicatesArgs),
    /// Merge two JSON objects, overlay keys winning
    Merge(merge::MergeArgs),
    /// Summarize a sequence of numbers
    Stats(stats::StatsArgs),
    /// Format an amount as a currency string
    Currency(currency::CurrencyArgs),
    /// Convert a temperature between C, F and K
    Temperature(temperature::TemperatureArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let (json_result, exit_code) = commands::run_json(cli.command);

    if let Err(err) = toolbelt::output::print_json_result(json_result) {
        eprintln!("toolbelt: failed to write response: {}", err);
        return std::process::ExitCode::from(1);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
