//! Line-oriented variant: prompt for a path, extract, print the report,
//! save it next to the source PDF.

use std::io::{self, Write};
use std::path::Path;
use std::process::exit;

use chrono::Local;
use log::debug;
use pdfreport::{Error, extract, format_report, save_report};

/// Sentinel used for absent information fields in this variant.
const SENTINEL: &str = "unknown";

fn main() {
    env_logger::init();

    print!("Enter the pdf file path : ");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        eprintln!("failed to read input");
        exit(1);
    }
    let path = Path::new(line.trim());
    debug!("extracting {}", path.display());

    // No extension check here: the parser is left to reject non-PDF input.
    let report = match extract(path, SENTINEL) {
        Ok(report) => report,
        Err(Error::NotFound(_)) => {
            println!("file not found..");
            exit(1);
        }
        Err(err) => {
            println!("Error in pdf file: {err}");
            exit(1);
        }
    };

    let text = format_report(&report, Local::now().naive_local());
    print!("{text}");

    // A failed save is a warning only; extraction has already succeeded.
    match save_report(&report, &text) {
        Ok(saved) => println!("report saved to {}", saved.display()),
        Err(err) => println!("failed to save report: {err}"),
    }
}
