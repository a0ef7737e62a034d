use crate::cell::{CellKind, CellValue};
use crate::error::{GridError, GridResult};
use crate::grid::{Grid, Pos};
use std::fmt::{self, Display, Formatter};

/// A grid whose cell type is picked at runtime.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "grid", rename_all = "lowercase"))]
pub enum AnyGrid {
    Int(Grid<i64>),
    Float(Grid<f64>),
    Text(Grid<String>),
}

macro_rules! dispatch {
    ($self:expr, $g:ident => $body:expr) => {
        match $self {
            AnyGrid::Int($g) => $body,
            AnyGrid::Float($g) => $body,
            AnyGrid::Text($g) => $body,
        }
    };
}

fn render<I>(values: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Display,
{
    values.into_iter().map(|v| v.to_string()).collect()
}

fn find_in<T: CellValue>(grid: &Grid<T>, raw: &str) -> GridResult<Vec<Pos>> {
    let needle = T::parse_cell(raw)
        .map_err(|reason| GridError::Needle { value: raw.to_string(), kind: T::KIND, reason })?;
    Ok(grid.find_value(&needle))
}

impl AnyGrid {
    pub fn parse<S: AsRef<str>>(lines: &[S], kind: CellKind, delimiter: Option<&str>) -> GridResult<Self> {
        Ok(match kind {
            CellKind::Int => AnyGrid::Int(Grid::parse(lines, delimiter)?),
            CellKind::Float => AnyGrid::Float(Grid::parse(lines, delimiter)?),
            CellKind::Text => AnyGrid::Text(Grid::parse(lines, delimiter)?),
        })
    }

    /// Like [`AnyGrid::parse`], with the cell type given by name. An unknown
    /// name fails before any line is looked at.
    pub fn parse_named<S: AsRef<str>>(lines: &[S], type_name: &str, delimiter: Option<&str>) -> GridResult<Self> {
        let kind: CellKind = type_name.parse()?;
        Self::parse(lines, kind, delimiter)
    }

    pub fn kind(&self) -> CellKind {
        match self { AnyGrid::Int(_) => CellKind::Int, AnyGrid::Float(_) => CellKind::Float, AnyGrid::Text(_) => CellKind::Text }
    }

    pub fn total_rows(&self) -> usize { dispatch!(self, g => g.total_rows()) }
    pub fn total_columns(&self) -> usize { dispatch!(self, g => g.total_columns()) }

    pub fn row(&self, r: usize) -> GridResult<Vec<String>> { dispatch!(self, g => g.row(r).map(render)) }
    pub fn column(&self, c: usize) -> GridResult<Vec<String>> { dispatch!(self, g => g.column(c).map(render)) }
    pub fn cell(&self, r: usize, c: usize) -> GridResult<String> { dispatch!(self, g => g.cell(r, c).map(ToString::to_string)) }

    pub fn is_cell_valid(&self, r: usize, c: usize) -> bool { dispatch!(self, g => g.is_cell_valid(r, c)) }
    pub fn is_cell_edge(&self, r: usize, c: usize) -> bool { dispatch!(self, g => g.is_cell_edge(r, c)) }
    pub fn is_on_border(&self, r: usize, c: usize) -> bool { dispatch!(self, g => g.is_on_border(r, c)) }

    pub fn neighbours(&self, pos: Pos, include_diagonals: bool) -> Vec<(String, Pos)> {
        dispatch!(self, g => g.neighbours(pos, include_diagonals).map(|(v, p)| (v.to_string(), p)).collect())
    }

    /// Converts `raw` the way cells are converted, then searches for it.
    pub fn find_raw(&self, raw: &str) -> GridResult<Vec<Pos>> { dispatch!(self, g => find_in(g, raw)) }
}

impl Display for AnyGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { dispatch!(self, g => Display::fmt(g, f)) }
}
