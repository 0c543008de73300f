mod cli;
mod patterns;
mod tui;

use std::process;

fn main() {
    let args = cli::parse_args().unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(1);
    });
    cli::run(args);
}
