//! Catalog loading utilities
//!
//! Provides functions to load a catalog from a file or use the embedded one.
//!
//! The file format is line based: `[Category]` starts a category and every
//! following non-empty line is one of its words. Blank lines and lines
//! starting with `#` are skipped.

use crate::core::{Catalog, CatalogError};
use std::fs;
use std::path::Path;

/// Load a catalog from a file
///
/// # Errors
///
/// Returns `CatalogError::Io` if the file cannot be read, or a validation
/// error if its contents do not form a playable catalog.
///
/// # Examples
/// ```no_run
/// use secret_word::wordlists::loader::load_from_file;
///
/// let catalog = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} categories", catalog.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// Parse catalog text
///
/// # Errors
///
/// Returns `CatalogError` if a word precedes every category header, a
/// header is blank, or the result is not a valid catalog.
///
/// # Examples
/// ```
/// use secret_word::wordlists::loader::parse;
///
/// let catalog = parse("[Frutas]\nmaçã\nbanana\n").unwrap();
/// assert_eq!(catalog.categories()[0].name(), "Frutas");
/// assert_eq!(catalog.word_count(), 2);
/// ```
pub fn parse(text: &str) -> Result<Catalog, CatalogError> {
    let mut entries: Vec<(String, Vec<String>)> = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            let name = name.trim();
            if name.is_empty() {
                return Err(CatalogError::BlankCategoryName { line: index + 1 });
            }
            entries.push((name.to_string(), Vec::new()));
        } else if let Some((_, words)) = entries.last_mut() {
            words.push(line.to_string());
        } else {
            return Err(CatalogError::WordWithoutCategory {
                line: index + 1,
                word: line.to_string(),
            });
        }
    }

    Catalog::new(entries)
}

/// Build the catalog compiled into the binary
///
/// # Errors
///
/// The build script validates the embedded data, so this only fails if
/// that validation and `Catalog::new` ever disagree.
pub fn builtin() -> Result<Catalog, CatalogError> {
    Catalog::new(
        super::CATEGORIES
            .iter()
            .map(|&(name, words)| (name, words.iter().copied())),
    )
}
