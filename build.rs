//! Build script to embed the built-in word catalog
//!
//! Reads `data/words.txt` and generates Rust source with a const table of
//! categories and their words.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const CATALOG_PATH: &str = "data/words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_catalog(CATALOG_PATH, &Path::new(&out_dir).join("catalog.rs"));

    // Rebuild if the catalog changes
    println!("cargo:rerun-if-changed={CATALOG_PATH}");
}

fn generate_catalog(input_path: &str, output_path: &Path) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut categories: Vec<(String, Vec<String>)> = Vec::new();
    for (number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            categories.push((name.trim().to_string(), Vec::new()));
        } else if let Some((_, words)) = categories.last_mut() {
            words.push(line.to_string());
        } else {
            panic!("{input_path}:{}: word '{line}' appears before any category", number + 1);
        }
    }

    for (index, (name, words)) in categories.iter().enumerate() {
        assert!(!words.is_empty(), "{input_path}: category '{name}' has no words");
        assert!(
            categories[..index].iter().all(|(other, _)| other != name),
            "{input_path}: category '{name}' is defined twice"
        );
        for word in words {
            assert!(
                !word.chars().any(|c| c != ' ' && (c.is_whitespace() || c.is_control())),
                "{input_path}: word {word:?} contains whitespace other than a plain space"
            );
        }
    }
    assert!(!categories.is_empty(), "{input_path}: no categories defined");

    let word_count: usize = categories.iter().map(|(_, words)| words.len()).sum();
    let category_count = categories.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated from {input_path}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Built-in categories and their candidate words").unwrap();
    writeln!(output, "pub const CATEGORIES: &[(&str, &[&str])] = &[").unwrap();

    for (name, words) in &categories {
        writeln!(output, "    ({name:?}, &[").unwrap();
        for word in words {
            writeln!(output, "        {word:?},").unwrap();
        }
        writeln!(output, "    ]),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of categories in CATEGORIES").unwrap();
    writeln!(output, "pub const CATEGORY_COUNT: usize = {category_count};").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words across all CATEGORIES").unwrap();
    writeln!(output, "pub const WORD_COUNT: usize = {word_count};").unwrap();
}
