//! sig-reports CLI entry point
//!
//! Minimal entrypoint: parse and dispatch via cli::run, print errors to
//! stderr, exit non-zero on failure. All logic lives in the library.

use sig_reports::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
