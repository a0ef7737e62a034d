use itertools::{iproduct, Itertools};
use log::{debug, trace};
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Sub};

use crate::cell::{CellKind, CellValue};
use crate::error::{GridError, GridResult};

/// A (row, column) coordinate, row first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos { pub r: usize, pub c: usize }

impl Pos {
    pub fn new(r: usize, c: usize) -> Self { Self { r, c } }

    /// Moves by a signed offset; `None` when either coordinate would go negative.
    pub fn offset(self, dr: isize, dc: isize) -> Option<Pos> {
        Some(Pos { r: self.r.checked_add_signed(dr)?, c: self.c.checked_add_signed(dc)? })
    }

    pub fn manhattan(self, other: Pos) -> usize { manhattan_distance((self.r, self.c), (other.r, other.c)) }
}

impl From<(usize, usize)> for Pos {
    fn from((r, c): (usize, usize)) -> Self { Self { r, c } }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { write!(f, "({}, {})", self.r, self.c) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction { Left, Up, Right, Down, TopLeft, TopRight, BottomLeft, BottomRight }

impl Direction {
    /// Orthogonal directions first, then diagonals; neighbour order follows this.
    pub const ALL: [Direction; 8] = [
        Direction::Left, Direction::Up, Direction::Right, Direction::Down,
        Direction::TopLeft, Direction::TopRight, Direction::BottomLeft, Direction::BottomRight,
    ];

    /// (row delta, column delta)
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::TopLeft => (-1, -1),
            Direction::TopRight => (-1, 1),
            Direction::BottomLeft => (1, -1),
            Direction::BottomRight => (1, 1),
        }
    }

    pub fn iter(include_diagonals: bool) -> impl Iterator<Item = Direction> + Clone {
        Self::ALL.into_iter().take(if include_diagonals { 8 } else { 4 })
    }
}

/// Rectangular, row-major grid of typed cells. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid<T> {
    total_rows: usize,
    total_columns: usize,
    cells: Vec<Vec<T>>,
}

impl<T: CellValue> Grid<T> {
    /// Parses one row per line. With a non-empty `delimiter` each line is split
    /// on it, otherwise every character is a cell.
    pub fn parse<S: AsRef<str>>(lines: &[S], delimiter: Option<&str>) -> GridResult<Self> {
        let raw: Vec<Vec<&str>> = lines.iter().map(|l| split_row(l.as_ref(), delimiter)).collect();
        let (total_rows, total_columns) = check_shape(&raw)?;

        let mut cells = Vec::with_capacity(total_rows);
        for (r, row) in raw.iter().enumerate() {
            let converted = row.iter().enumerate().map(|(c, &value)| {
                T::parse_cell(value).map_err(|reason| {
                    trace!("rejecting {value:?} at ({r}, {c}) as {}: {reason}", T::KIND);
                    GridError::Conversion { value: value.to_string(), row: r, column: c, reason }
                })
            }).collect::<GridResult<Vec<T>>>()?;
            cells.push(converted);
        }

        debug!("parsed {}x{} grid of {}", total_rows, total_columns, T::KIND);
        Ok(Self { total_rows, total_columns, cells })
    }

    pub fn cell_kind(&self) -> CellKind { T::KIND }
}

impl<T> Grid<T> {
    /// Builds a grid from already converted rows.
    pub fn from_rows(cells: Vec<Vec<T>>) -> GridResult<Self> {
        let (total_rows, total_columns) = check_shape(&cells)?;
        Ok(Self { total_rows, total_columns, cells })
    }

    pub fn total_rows(&self) -> usize { self.total_rows }
    pub fn total_columns(&self) -> usize { self.total_columns }

    pub fn row(&self, r: usize) -> GridResult<&[T]> {
        self.cells.get(r).map(Vec::as_slice).ok_or(GridError::RowOutOfRange { index: r, total: self.total_rows })
    }

    pub fn column(&self, c: usize) -> GridResult<Vec<T>>
    where
        T: Clone,
    {
        if c >= self.total_columns { return Err(GridError::ColumnOutOfRange { index: c, total: self.total_columns }); }
        Ok(self.cells.iter().map(|row| row[c].clone()).collect())
    }

    pub fn cell(&self, r: usize, c: usize) -> GridResult<&T> {
        let row = self.row(r)?;
        row.get(c).ok_or(GridError::ColumnOutOfRange { index: c, total: self.total_columns })
    }

    /// Rows top to bottom. Call again to restart.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + Clone + '_ {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Columns left to right, each collected top to bottom.
    pub fn columns(&self) -> impl Iterator<Item = Vec<T>> + Clone + '_
    where
        T: Clone,
    {
        (0..self.total_columns).map(move |c| self.cells.iter().map(|row| row[c].clone()).collect())
    }

    /// Every coordinate in row-major scan order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + Clone {
        iproduct!(0..self.total_rows, 0..self.total_columns).map(Pos::from)
    }

    pub fn is_cell_valid(&self, r: usize, c: usize) -> bool {
        r < self.total_rows && c < self.total_columns
    }

    /// In the first or last row and, at the same time, in the first or last
    /// column.
    pub fn is_cell_edge(&self, r: usize, c: usize) -> bool {
        self.is_cell_valid(r, c)
            && (r == 0 || r == self.total_rows - 1)
            && (c == 0 || c == self.total_columns - 1)
    }

    /// In the first or last row, or in the first or last column.
    pub fn is_on_border(&self, r: usize, c: usize) -> bool {
        self.is_cell_valid(r, c)
            && (r == 0 || r == self.total_rows - 1 || c == 0 || c == self.total_columns - 1)
    }

    /// Neighbouring cells with their coordinates: left, up, right, down, then
    /// top-left, top-right, bottom-left, bottom-right when `include_diagonals`.
    /// Candidates outside the grid are skipped.
    pub fn neighbours(&self, pos: Pos, include_diagonals: bool) -> impl Iterator<Item = (&T, Pos)> + '_ {
        Direction::iter(include_diagonals)
            .filter_map(move |d| {
                let (dr, dc) = d.offset();
                pos.offset(dr, dc)
            })
            .filter(move |p| self.is_cell_valid(p.r, p.c))
            .map(move |p| (&self.cells[p.r][p.c], p))
    }

    /// All coordinates holding `value`, in row-major scan order.
    pub fn find_value(&self, value: &T) -> Vec<Pos>
    where
        T: PartialEq,
    {
        self.positions().filter(|p| self.cells[p.r][p.c] == *value).collect()
    }
}

impl<T: Display> Display for Grid<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cells.iter().map(|row| row.iter().join("")).join("\n"))
    }
}

/// `|a.x - b.x| + |a.y - b.y|`
pub fn manhattan_distance<N>(a: (N, N), b: (N, N)) -> N
where
    N: Copy + PartialOrd + Sub<Output = N> + Add<Output = N>,
{
    abs_diff(a.0, b.0) + abs_diff(a.1, b.1)
}

fn abs_diff<N: Copy + PartialOrd + Sub<Output = N>>(x: N, y: N) -> N {
    if x >= y { x - y } else { y - x }
}

fn split_row<'a>(line: &'a str, delimiter: Option<&str>) -> Vec<&'a str> {
    match delimiter {
        Some(d) if !d.is_empty() => line.split(d).collect(),
        _ => line.char_indices().map(|(i, ch)| &line[i..i + ch.len_utf8()]).collect(),
    }
}

fn check_shape<U>(rows: &[Vec<U>]) -> GridResult<(usize, usize)> {
    let total_columns = rows.first().map(Vec::len).ok_or(GridError::Empty)?;
    if total_columns == 0 { return Err(GridError::Empty); }
    for (r, row) in rows.iter().enumerate() {
        if row.len() != total_columns {
            return Err(GridError::RaggedRow { row: r, expected: total_columns, found: row.len() });
        }
    }
    Ok((rows.len(), total_columns))
}
