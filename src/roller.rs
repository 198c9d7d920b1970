//! Rolling aggregation with periodic cell clearing.
//!
//! The pipeline appends one rolling-statistic column per requested statistic,
//! then clears the new cells at every window-boundary row so each aggregate
//! stays visible only between boundaries. The original frame is never
//! mutated.

use std::collections::HashSet;

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::frame::DataFrame;
use crate::series::Series;
use crate::window::{Rolling, Statistic};

/// Row positions at which computed statistics stay visible.
///
/// A position p is removed iff `p >= interval - 1` and
/// `(p - (interval - 1)) % interval == 0`: the end of the first window and
/// every position one interval apart from it. All other positions in
/// `[0, length)` are kept, ascending, without duplicates.
pub fn select_keep_indices(length: usize, interval: usize) -> Result<Vec<usize>> {
    if interval == 0 {
        return Err(Error::InvalidParameter(
            "interval must be greater than 0".to_string(),
        ));
    }
    let mut indices: Vec<usize> = (0..length)
        .filter(|&p| p + 1 < interval || (p + 1 - interval) % interval != 0)
        .collect();
    // Tail guard against overshoot.
    if indices.last().is_some_and(|&last| last >= length) {
        indices.pop();
    }
    Ok(indices)
}

/// Rolling-window aggregator over one DataFrame column.
///
/// Validates its parameters eagerly; the transform itself is pure and owns no
/// state across runs.
#[derive(Debug, Clone)]
pub struct Roller {
    functions: Vec<Statistic>,
    col2agg: String,
    interval: usize,
}

impl Roller {
    /// Create a new Roller, rejecting invalid parameters before any
    /// computation happens
    pub fn new(functions: Vec<Statistic>, col2agg: impl Into<String>, interval: usize) -> Result<Self> {
        let col2agg = col2agg.into();
        if functions.is_empty() {
            return Err(Error::InvalidParameter(
                "at least one statistic is required".to_string(),
            ));
        }
        if col2agg.is_empty() {
            return Err(Error::InvalidParameter(
                "aggregation column name cannot be empty".to_string(),
            ));
        }
        if interval == 0 {
            return Err(Error::InvalidParameter(
                "interval must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            functions,
            col2agg,
            interval,
        })
    }

    /// Parse statistic names and build a Roller
    pub fn from_names(names: &[&str], col2agg: impl Into<String>, interval: usize) -> Result<Self> {
        let functions = names
            .iter()
            .map(|name| name.parse::<Statistic>())
            .collect::<Result<Vec<_>>>()?;
        Self::new(functions, col2agg, interval)
    }

    /// The rolling interval
    pub fn interval(&self) -> usize {
        self.interval
    }

    /// The column being aggregated
    pub fn column(&self) -> &str {
        &self.col2agg
    }

    /// The statistics applied to each window, in order
    pub fn functions(&self) -> &[Statistic] {
        &self.functions
    }

    /// Names of the generated statistic columns, in `functions` order
    pub fn column_names(&self) -> Vec<String> {
        self.functions
            .iter()
            .map(|stat| stat.column_name(self.interval))
            .collect()
    }

    /// Keep-set for a table of the given length
    pub fn keep_indices(&self, length: usize) -> Result<Vec<usize>> {
        select_keep_indices(length, self.interval)
    }

    /// Append one rolling column per statistic to a copy of the frame
    pub fn aggregate(&self, df: &DataFrame) -> Result<DataFrame> {
        let series = df.column(&self.col2agg)?;
        if df.row_count() > 0 && series.values().iter().all(|c| c.as_f64().is_none()) {
            return Err(Error::TypeMismatch(format!(
                "column '{}' holds no numeric values",
                self.col2agg
            )));
        }
        let rolling = Rolling::new(series.numeric(), self.interval)?;
        let mut out = df.clone();
        for stat in &self.functions {
            let name = stat.column_name(self.interval);
            let cells: Vec<Cell> = rolling.apply(*stat).into_iter().map(Cell::from).collect();
            let series = Series::new(cells, Some(name.clone()))?;
            out.add_column(name, series)?;
        }
        Ok(out)
    }

    /// Blank every generated cell whose row is not in the keep-set
    ///
    /// Missing values at kept rows are left as-is; only non-kept rows are
    /// overwritten, with the explicit blank marker. Idempotent.
    pub fn clear_cells(&self, df: &DataFrame, keep: &[usize]) -> Result<DataFrame> {
        let keep: HashSet<usize> = keep.iter().copied().collect();
        let mut out = df.clone();
        for name in self.column_names() {
            for row in 0..out.row_count() {
                if !keep.contains(&row) {
                    out.set(&name, row, Cell::blank())?;
                }
            }
        }
        Ok(out)
    }

    /// Full pipeline: compute the keep-set, aggregate, clear non-kept rows
    pub fn run(&self, df: &DataFrame) -> Result<DataFrame> {
        let keep = self.keep_indices(df.row_count())?;
        let augmented = self.aggregate(df)?;
        self.clear_cells(&augmented, &keep)
    }
}
