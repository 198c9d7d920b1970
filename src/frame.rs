use std::collections::HashMap;

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::series::Series;

/// DataFrame struct: Column-oriented 2D data structure
///
/// Columns are held by name with insertion order preserved. Row order is
/// significant and never changes; the column set may grow but not shrink.
#[derive(Debug, Clone, PartialEq)]
pub struct DataFrame {
    data: HashMap<String, Series<Cell>>,
    column_order: Vec<String>,
    row_count: usize,
}

impl Default for DataFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl DataFrame {
    /// Create a new empty DataFrame
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            column_order: Vec::new(),
            row_count: 0,
        }
    }

    /// Build a DataFrame from (name, cells) pairs, preserving the given order
    pub fn from_columns<I>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Vec<Cell>)>,
    {
        let mut df = DataFrame::new();
        for (name, cells) in columns {
            let series = Series::new(cells, Some(name.clone()))?;
            df.add_column(name, series)?;
        }
        Ok(df)
    }

    /// Get the number of rows in the DataFrame
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Get the number of columns in the DataFrame
    pub fn column_count(&self) -> usize {
        self.column_order.len()
    }

    /// Check if the DataFrame contains a column with the given name
    pub fn contains_column(&self, column_name: &str) -> bool {
        self.data.contains_key(column_name)
    }

    /// Column names in insertion order
    pub fn column_names(&self) -> &[String] {
        &self.column_order
    }

    /// Add a column to the DataFrame
    pub fn add_column(&mut self, column_name: String, series: Series<Cell>) -> Result<()> {
        if self.contains_column(&column_name) {
            return Err(Error::DuplicateColumnName(column_name));
        }
        if !self.column_order.is_empty() && series.len() != self.row_count {
            return Err(Error::LengthMismatch {
                expected: self.row_count,
                found: series.len(),
            });
        }
        if self.column_order.is_empty() {
            self.row_count = series.len();
        }
        self.column_order.push(column_name.clone());
        self.data.insert(column_name, series);
        Ok(())
    }

    /// Get a column by name
    pub fn column(&self, column_name: &str) -> Result<&Series<Cell>> {
        self.data
            .get(column_name)
            .ok_or_else(|| Error::ColumnNotFound(column_name.to_string()))
    }

    /// Get the cell at (column, row)
    pub fn get(&self, column_name: &str, row: usize) -> Result<&Cell> {
        let series = self.column(column_name)?;
        series.get(row).ok_or(Error::IndexOutOfBounds {
            index: row,
            size: self.row_count,
        })
    }

    /// Overwrite the cell at (column, row)
    pub fn set(&mut self, column_name: &str, row: usize, value: Cell) -> Result<()> {
        let series = self
            .data
            .get_mut(column_name)
            .ok_or_else(|| Error::ColumnNotFound(column_name.to_string()))?;
        series.set(row, value)
    }

    /// Project onto a subset of columns, in the requested order
    pub fn select_columns(&self, names: &[&str]) -> Result<DataFrame> {
        let mut df = DataFrame::new();
        for &name in names {
            let series = self.column(name)?;
            df.add_column(name.to_string(), series.clone())?;
        }
        Ok(df)
    }

    /// One row as owned cells, in column order
    pub fn row(&self, row: usize) -> Result<Vec<Cell>> {
        if row >= self.row_count {
            return Err(Error::IndexOutOfBounds {
                index: row,
                size: self.row_count,
            });
        }
        let mut cells = Vec::with_capacity(self.column_order.len());
        for name in &self.column_order {
            cells.push(self.data[name].values()[row].clone());
        }
        Ok(cells)
    }
}
