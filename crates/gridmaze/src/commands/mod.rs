pub mod check;
pub mod completion;
pub mod config;
pub mod generate;

use colored::Colorize;

pub fn print_version() {
    println!(
        "{} {}",
        "gridmaze".bold(),
        env!("CARGO_PKG_VERSION").green()
    );
}
