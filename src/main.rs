//! Category Report CLI
//!
//! Reads category/subcategory records from a JSON file and writes five
//! reports next to it.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --input records.json --output-dir reports
//! cargo run -- --strategy parallel --max-workers 4
//! ```
//!
//! With no arguments the program reads `data.json` and writes into the
//! current directory.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (input cannot be opened, read or decoded, report cannot be written)

use category_report::cli;
use category_report::io::load_records;
use category_report::strategy;
use std::path::PathBuf;
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::init_logging(args.verbose);

    let strategy = {
        let config = if matches!(args.strategy, cli::StrategyType::Parallel) {
            Some(args.to_parallel_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy, config)
    };

    let written = load_records(&args.input_file)
        .and_then(|records| strategy.render_all(&records, &args.output_dir));

    match written {
        Ok(paths) => println!("Data has been successfully written to {}", file_list(&paths)),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Join paths as `a, b, c and d`
fn file_list(paths: &[PathBuf]) -> String {
    let names: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
    match names.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} and {}", rest.join(", "), last),
        Some((last, _)) => last.clone(),
        None => String::new(),
    }
}
