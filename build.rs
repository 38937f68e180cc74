//! Build script to generate the embedded dictionary
//!
//! Reads `data/english.txt` and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

fn main() -> io::Result<()> {
    let out_dir = env::var("OUT_DIR").map_err(io::Error::other)?;

    generate_word_list(
        "data/english.txt",
        &Path::new(&out_dir).join("english.rs"),
        "ENGLISH",
        "English dictionary used for answers, guesses and hints",
    )?;

    println!("cargo:rerun-if-changed=data/english.txt");
    Ok(())
}

fn generate_word_list(
    input_path: &str,
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
) -> io::Result<()> {
    let content = fs::read_to_string(input_path)?;

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .collect();
    let count = words.len();

    let mut output = io::BufWriter::new(fs::File::create(output_path)?);

    writeln!(output, "// Generated word list")?;
    writeln!(output, "//")?;
    writeln!(output, "// {doc_comment}")?;
    writeln!(output)?;
    writeln!(output, "/// {doc_comment}")?;
    writeln!(output, "pub const {const_name}: &[&str] = &[")?;
    for word in words {
        writeln!(output, "    \"{word}\",")?;
    }
    writeln!(output, "];")?;
    writeln!(output)?;
    writeln!(output, "/// Number of words in {const_name}")?;
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};")?;
    output.flush()
}
