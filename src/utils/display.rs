//! Terminal output helpers
//!
//! Task results go to stdout uncolored so they can be piped; failures and
//! hints go to stderr.

use colored::*;

pub fn format_header(text: &str) -> String {
    format!(
        "\n{}\n{}",
        text.bright_cyan().bold(),
        "=".repeat(text.chars().count()).bright_cyan()
    )
}

pub fn format_hint(text: &str) -> String {
    format!("{} {}", "hint:".yellow().bold(), text)
}

pub fn print_header(text: &str) {
    println!("{}", format_header(text));
}

pub fn print_success(text: &str) {
    println!("{}", text.green());
}

pub fn print_error(text: &str) {
    eprintln!("{}", text.red().bold());
}

pub fn print_hint(text: &str) {
    eprintln!("{}", format_hint(text));
}

pub fn print_result(text: &str) {
    println!("{}", text);
}
