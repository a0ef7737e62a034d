use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use crate::error::GridError;

/// Scalar type a grid's cells are converted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CellKind { Int, Float, Text }

impl CellKind {
    pub fn name(self) -> &'static str {
        match self { CellKind::Int => "int", CellKind::Float => "float", CellKind::Text => "text" }
    }
}

impl Display for CellKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

impl FromStr for CellKind {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "int" | "integer" | "i64" => Ok(CellKind::Int),
            "float" | "f64" | "double" => Ok(CellKind::Float),
            "text" | "str" | "string" => Ok(CellKind::Text),
            _ => Err(GridError::UnsupportedType { name: s.to_string() }),
        }
    }
}

/// A value a grid cell can hold, converted from its raw text.
///
/// Implemented for `i64`, `f64` and `String`; any other type is rejected at
/// compile time by the trait bound on [`Grid`](crate::Grid).
pub trait CellValue: Clone + PartialEq + Debug + Display {
    const KIND: CellKind;

    /// Converts one raw cell. The error is a human readable reason, the
    /// caller attaches the position.
    fn parse_cell(raw: &str) -> Result<Self, String>;
}

impl CellValue for f64 {
    const KIND: CellKind = CellKind::Float;

    fn parse_cell(raw: &str) -> Result<Self, String> {
        raw.trim().parse::<f64>().map_err(|e| e.to_string())
    }
}

impl CellValue for i64 {
    const KIND: CellKind = CellKind::Int;

    // "3.0" is accepted: the text goes through f64 and is truncated toward zero
    fn parse_cell(raw: &str) -> Result<Self, String> {
        let f = f64::parse_cell(raw)?;
        if !f.is_finite() { return Err(format!("{f} has no integer value")); }
        let t = f.trunc();
        if t < i64::MIN as f64 || t >= i64::MAX as f64 { return Err(format!("{f} does not fit in i64")); }
        Ok(t as i64)
    }
}

impl CellValue for String {
    const KIND: CellKind = CellKind::Text;

    fn parse_cell(raw: &str) -> Result<Self, String> { Ok(raw.to_string()) }
}
