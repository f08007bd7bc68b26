//! `first_unique` — print the first non-repeating character of a string.
//!
//! ```bash
//! cargo run --bin first_unique -- "EntwicklerHeld"
//! ```

use std::process::ExitCode;

use clap::Parser;

use gridword::errors::GridWordError;
use gridword::first_unique::find_first_non_repeating;

/// Find the first character that occurs exactly once (case-insensitive)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The string to inspect
    input: Option<String>,
}

fn main() -> ExitCode {
    gridword::log::init_logger(gridword::log::debug_requested());

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e.display_detailed());
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<(), GridWordError> {
    let cli = Cli::parse();
    let input = cli.input.ok_or(GridWordError::MissingArgument { name: "STRING" })?;

    let answer = find_first_non_repeating(&input).map_or_else(|| "None".to_string(), |c| c.to_string());
    log::debug!("Inspecting {} characters", input.chars().count());
    println!("The first non repeating character of the string {input} is -- {answer}");
    Ok(())
}
