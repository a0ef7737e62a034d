//! Typed 2D grids parsed from puzzle input lines.

pub mod cell;
pub mod dynamic;
pub mod error;
pub mod grid;

pub use cell::{CellKind, CellValue};
pub use dynamic::AnyGrid;
pub use error::{GridError, GridResult};
pub use grid::{manhattan_distance, Direction, Grid, Pos};
