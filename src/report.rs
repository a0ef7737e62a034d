use anyhow::Result;
use chrono::Local;
use colored::*;
use itertools::Itertools;
use puzzlekit_core::Pos;
use std::io::Write;

/// Prints query results as titled sections.
pub struct Reporter<W: Write> {
    out: W,
    color: bool,
    timestamps: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, color: bool, timestamps: bool) -> Self {
        Self { out, color, timestamps }
    }

    pub fn section(&mut self, title: &str, details: &str) -> Result<()> {
        let stamp = if self.timestamps {
            format!("[{}] ", Local::now().format("%Y-%m-%d %H:%M:%S"))
        } else {
            String::new()
        };

        if self.color {
            writeln!(self.out, "{}{} {}", stamp.as_str().dimmed(), "➤".blue().bold(), title.bold())?;
        } else {
            writeln!(self.out, "{}➤ {}", stamp, title)?;
        }
        if !details.is_empty() { writeln!(self.out, "{}", details)?; }
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W { self.out }
}

pub fn format_cells(cells: &[String]) -> String { cells.iter().join(" ") }

pub fn format_positions(positions: &[Pos]) -> String {
    if positions.is_empty() { return "none".into(); }
    positions.iter().join(", ")
}

pub fn format_neighbours(neighbours: &[(String, Pos)]) -> String {
    neighbours.iter().map(|(v, p)| format!("{} at {}", v, p)).join("\n")
}
