use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use puzzlekit::{
    input::read_lines,
    report::{format_cells, format_neighbours, format_positions, Reporter},
    AnyGrid, CellKind, Pos,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "puzzlekit", version, about = "Load puzzle input into a typed grid and query it")]
struct Cli {
    /// Path to the input file. If omitted, reads from stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Cell type: int, float or text
    #[arg(short = 't', long, default_value = "text")]
    cell_type: String,

    /// Column delimiter. If omitted, every character is a cell.
    #[arg(short, long)]
    delimiter: Option<String>,

    /// Colour the section headers
    #[arg(long)]
    color: bool,

    /// Prefix section headers with the local time
    #[arg(long)]
    timestamps: bool,

    /// Print the result as JSON (needs the `serde` feature)
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the whole grid
    Show,
    /// Dimensions and cell type
    Info,
    Row { index: usize },
    Column { index: usize },
    /// One cell, with its edge and border flags
    Cell { row: usize, column: usize },
    /// Every coordinate holding VALUE
    Find { value: String },
    Neighbours {
        row: usize,
        column: usize,
        #[arg(long)]
        diagonals: bool,
    },
    /// Manhattan distance between two coordinates
    Distance { r1: usize, c1: usize, r2: usize, c2: usize },
}

#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "query", rename_all = "snake_case"))]
enum Outcome<'a> {
    Show { grid: &'a AnyGrid },
    Info { rows: usize, columns: usize, kind: CellKind },
    Row { index: usize, cells: Vec<String> },
    Column { index: usize, cells: Vec<String> },
    Cell { pos: Pos, value: String, edge: bool, border: bool },
    Find { value: String, positions: Vec<Pos> },
    Neighbours { pos: Pos, diagonals: bool, neighbours: Vec<(String, Pos)> },
    Distance { from: Pos, to: Pos, distance: usize },
}

impl Outcome<'_> {
    fn title(&self) -> String {
        match self {
            Outcome::Show { .. } => "Grid".into(),
            Outcome::Info { .. } => "Info".into(),
            Outcome::Row { index, .. } => format!("Row {}", index),
            Outcome::Column { index, .. } => format!("Column {}", index),
            Outcome::Cell { pos, .. } => format!("Cell {}", pos),
            Outcome::Find { value, positions } => format!("{} match(es) for {:?}", positions.len(), value),
            Outcome::Neighbours { pos, diagonals, .. } => {
                format!("Neighbours of {}{}", pos, if *diagonals { " (with diagonals)" } else { "" })
            }
            Outcome::Distance { from, to, .. } => format!("Distance {} -> {}", from, to),
        }
    }

    fn details(&self) -> String {
        match self {
            Outcome::Show { grid } => grid.to_string(),
            Outcome::Info { rows, columns, kind } => format!("{} rows x {} columns of {}", rows, columns, kind),
            Outcome::Row { cells, .. } | Outcome::Column { cells, .. } => format_cells(cells),
            Outcome::Cell { value, edge, border, .. } => format!("{} (edge: {}, border: {})", value, edge, border),
            Outcome::Find { positions, .. } => format_positions(positions),
            Outcome::Neighbours { neighbours, .. } => format_neighbours(neighbours),
            Outcome::Distance { distance, .. } => distance.to_string(),
        }
    }
}

fn run<'a>(command: &Command, grid: &'a AnyGrid) -> Result<Outcome<'a>> {
    Ok(match *command {
        Command::Show => Outcome::Show { grid },
        Command::Info => Outcome::Info { rows: grid.total_rows(), columns: grid.total_columns(), kind: grid.kind() },
        Command::Row { index } => Outcome::Row { index, cells: grid.row(index)? },
        Command::Column { index } => Outcome::Column { index, cells: grid.column(index)? },
        Command::Cell { row, column } => Outcome::Cell {
            pos: Pos::new(row, column),
            value: grid.cell(row, column)?,
            edge: grid.is_cell_edge(row, column),
            border: grid.is_on_border(row, column),
        },
        Command::Find { ref value } => Outcome::Find { value: value.clone(), positions: grid.find_raw(value)? },
        Command::Neighbours { row, column, diagonals } => {
            let pos = Pos::new(row, column);
            if !grid.is_cell_valid(row, column) { anyhow::bail!("{} is outside the grid", pos) }
            Outcome::Neighbours { pos, diagonals, neighbours: grid.neighbours(pos, diagonals) }
        }
        Command::Distance { r1, c1, r2, c2 } => {
            let (from, to) = (Pos::new(r1, c1), Pos::new(r2, c2));
            Outcome::Distance { from, to, distance: from.manhattan(to) }
        }
    })
}

#[cfg(feature = "serde")]
fn print_json(outcome: &Outcome) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(outcome)?);
    Ok(())
}

#[cfg(not(feature = "serde"))]
fn print_json(_: &Outcome) -> Result<()> {
    anyhow::bail!("--json needs puzzlekit built with the `serde` feature")
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let lines = read_lines(cli.input.as_deref())?;
    let grid = AnyGrid::parse_named(&lines, &cli.cell_type, cli.delimiter.as_deref()).context("parse grid")?;
    info!("loaded {}x{} {} grid", grid.total_rows(), grid.total_columns(), grid.kind());

    let outcome = run(&cli.command, &grid)?;

    if cli.json { return print_json(&outcome); }

    let mut reporter = Reporter::new(std::io::stdout().lock(), cli.color, cli.timestamps);
    reporter.section(&outcome.title(), &outcome.details())?;
    Ok(())
}
