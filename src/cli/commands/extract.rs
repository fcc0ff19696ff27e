//! Extract command implementation.

use crate::core::identifiers::extract_identifiers;
use crate::models::title::{Title, TitleFields};
use crate::Result;
use colored::Colorize;

/// Print the release identifiers of `release`.
pub fn extract(fields: TitleFields, release: &str) -> Result<()> {
    let title = Title::from_fields(fields)?;
    let identifiers = extract_identifiers(&title, release);

    println!("{} {}", "Title:".bold(), title);
    if identifiers.is_empty() {
        println!("No release identifiers found.");
    } else {
        println!("{} {}", "Identifiers:".bold(), identifiers.join(" ").cyan());
    }

    Ok(())
}
