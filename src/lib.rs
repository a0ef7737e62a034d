pub mod input;
pub mod report;

pub use puzzlekit_core::{manhattan_distance, AnyGrid, CellKind, CellValue, Direction, Grid, GridError, Pos};
