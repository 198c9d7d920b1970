use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A single table cell: numeric, text, boolean, or missing.
///
/// `Empty` is the missing-value marker (NA). A rolling statistic that could
/// not be computed stays `Empty`, while a computed value that was cleared by
/// the keep-pattern becomes an empty `Text` cell. The two look the same in a
/// written file but stay distinct in memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    /// Floating point value
    Float(f64),
    /// Integer value
    Int(i64),
    /// Text value
    Text(String),
    /// Boolean value
    Bool(bool),
    /// Missing value (NA)
    Empty,
}

impl Cell {
    /// Check if the cell is missing
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Numeric view of the cell, if it has one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Float(v) => Some(*v),
            Cell::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// The explicit blank marker written over cleared statistic cells
    pub fn blank() -> Self {
        Cell::Text(String::new())
    }

    /// Field representation used by the CSV and Excel writers
    ///
    /// Missing cells and blanked cells both serialize to an empty field.
    pub fn to_field(&self) -> String {
        match self {
            Cell::Float(v) => v.to_string(),
            Cell::Int(v) => v.to_string(),
            Cell::Text(s) => s.clone(),
            Cell::Bool(b) => b.to_string(),
            Cell::Empty => String::new(),
        }
    }

    /// Parse a raw text field into the narrowest matching cell type
    pub fn from_field(field: &str) -> Cell {
        let trimmed = field.trim();
        if trimmed.is_empty() {
            return Cell::Empty;
        }
        if let Ok(v) = trimmed.parse::<i64>() {
            return Cell::Int(v);
        }
        if let Ok(v) = trimmed.parse::<f64>() {
            return Cell::Float(v);
        }
        match trimmed.to_lowercase().as_str() {
            "true" => Cell::Bool(true),
            "false" => Cell::Bool(false),
            _ => Cell::Text(field.to_string()),
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Float(v) => write!(f, "{}", v),
            Cell::Int(v) => write!(f, "{}", v),
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Bool(b) => write!(f, "{}", b),
            Cell::Empty => write!(f, "NA"),
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Bool(value)
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

// Computed rolling values arrive as Option<f64>; None stays missing.
impl From<Option<f64>> for Cell {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) => Cell::Float(v),
            None => Cell::Empty,
        }
    }
}
