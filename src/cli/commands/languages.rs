//! Languages command implementation.

use crate::models::language::all_languages;
use colored::Colorize;

/// List the supported languages.
pub fn list_languages() {
    println!("{}", "Supported languages".bold());
    for language in all_languages() {
        println!("  {:<5} {}", language.iso_name.cyan(), language.full_name);
    }
}
