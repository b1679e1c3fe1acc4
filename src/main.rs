//! ghi CLI entry point.
//!
//! Parses command-line arguments and hands them to the library.

use clap::Parser;
use ghi::cli::Cli;
use ghi::output::print_error;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = ghi::run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
