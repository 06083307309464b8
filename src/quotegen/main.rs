//! Thin binary: all terminal concerns live in `cli/`, all logic in the library.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
