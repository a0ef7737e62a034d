use anyhow::{Context, Result};
use std::{fs, io::Read, path::Path};

/// Reads a text file as lines with their terminators stripped.
pub fn load_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(split_lines(&text))
}

/// Reads from `input` when given, otherwise from stdin.
pub fn read_lines(input: Option<&Path>) -> Result<Vec<String>> {
    match input {
        Some(p) => load_lines(p),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            Ok(split_lines(&buf))
        }
    }
}

/// `lines()` already drops `\n` and `\r\n`; a trailing newline adds no empty line.
/// A lone `\r` is not a line break and stays inside the line.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}
