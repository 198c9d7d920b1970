//! Trailing-window aggregation over an optionally-missing numeric sequence.
//!
//! A `Rolling` recomputes each statistic from scratch over the window
//! `[p - window_size + 1, p]`; no accumulator survives across windows.

use std::fmt::{self, Display};
use std::str::FromStr;

use num_traits::ToPrimitive;

use crate::error::{Error, Result};
use crate::series::Series;

/// A named reduction applied over each rolling window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    Mean,
    Std,
    Var,
    Sum,
    Min,
    Max,
    Median,
}

impl Statistic {
    /// Fixed prefix used when naming a generated column
    pub fn column_prefix(&self) -> &'static str {
        match self {
            Statistic::Mean => "avg",
            Statistic::Std => "std",
            Statistic::Var => "var",
            Statistic::Sum => "sum",
            Statistic::Min => "min",
            Statistic::Max => "max",
            Statistic::Median => "med",
        }
    }

    /// Column name for this statistic at a given window size, e.g. "avg-5"
    pub fn column_name(&self, interval: usize) -> String {
        format!("{}-{}", self.column_prefix(), interval)
    }
}

impl FromStr for Statistic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mean" | "avg" | "average" => Ok(Statistic::Mean),
            "std" | "stddev" => Ok(Statistic::Std),
            "var" | "variance" => Ok(Statistic::Var),
            "sum" => Ok(Statistic::Sum),
            "min" => Ok(Statistic::Min),
            "max" => Ok(Statistic::Max),
            "median" | "med" => Ok(Statistic::Median),
            _ => Err(Error::UnknownStatistic(s.trim().to_string())),
        }
    }
}

impl Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Statistic::Mean => "mean",
            Statistic::Std => "std",
            Statistic::Var => "var",
            Statistic::Sum => "sum",
            Statistic::Min => "min",
            Statistic::Max => "max",
            Statistic::Median => "median",
        };
        write!(f, "{}", name)
    }
}

/// Rolling window configuration and operations
#[derive(Debug, Clone)]
pub struct Rolling {
    values: Vec<Option<f64>>,
    window_size: usize,
}

impl Rolling {
    /// Create a new rolling window over the given values
    pub fn new(values: Vec<Option<f64>>, window_size: usize) -> Result<Self> {
        if window_size == 0 {
            return Err(Error::InvalidParameter(
                "window size must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            values,
            window_size,
        })
    }

    /// Apply window operation with generic aggregation function
    ///
    /// The result at position p is None until a full window of positions is
    /// available. Within a full window, missing values are excluded from the
    /// reduction; a window with no present values yields None.
    fn apply_window_op<F>(&self, mut func: F) -> Vec<Option<f64>>
    where
        F: FnMut(&[f64]) -> Option<f64>,
    {
        let mut result = Vec::with_capacity(self.values.len());
        for i in 0..self.values.len() {
            if i + 1 < self.window_size {
                result.push(None);
                continue;
            }
            let start = i + 1 - self.window_size;
            let window_values: Vec<f64> = self.values[start..=i]
                .iter()
                .filter_map(|&v| v)
                .collect();
            if window_values.is_empty() {
                result.push(None);
            } else {
                result.push(func(&window_values));
            }
        }
        result
    }

    /// Calculate the mean of each window
    pub fn mean(&self) -> Vec<Option<f64>> {
        self.apply_window_op(|values| Some(values.iter().sum::<f64>() / values.len() as f64))
    }

    /// Calculate the sum of each window
    pub fn sum(&self) -> Vec<Option<f64>> {
        self.apply_window_op(|values| Some(values.iter().sum::<f64>()))
    }

    /// Calculate the sample standard deviation of each window
    pub fn std(&self, ddof: usize) -> Vec<Option<f64>> {
        self.var(ddof)
            .into_iter()
            .map(|v| v.map(f64::sqrt))
            .collect()
    }

    /// Calculate the sample variance of each window
    pub fn var(&self, ddof: usize) -> Vec<Option<f64>> {
        self.apply_window_op(|values| {
            if values.len() <= ddof {
                return None;
            }
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            Some(
                values.iter().map(|&x| (x - mean).powi(2)).sum::<f64>()
                    / (values.len() - ddof) as f64,
            )
        })
    }

    /// Calculate the minimum value in each window
    pub fn min(&self) -> Vec<Option<f64>> {
        self.apply_window_op(|values| Some(values.iter().fold(f64::INFINITY, |a, &b| a.min(b))))
    }

    /// Calculate the maximum value in each window
    pub fn max(&self) -> Vec<Option<f64>> {
        self.apply_window_op(|values| Some(values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b))))
    }

    /// Calculate the median of each window
    pub fn median(&self) -> Vec<Option<f64>> {
        self.apply_window_op(|values| {
            let mut sorted = values.to_vec();
            sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            let mid = sorted.len() / 2;
            if sorted.len() % 2 == 0 {
                Some((sorted[mid - 1] + sorted[mid]) / 2.0)
            } else {
                Some(sorted[mid])
            }
        })
    }

    /// Apply a named statistic to each window
    ///
    /// Std and var use ddof = 1 (sample statistics).
    pub fn apply(&self, statistic: Statistic) -> Vec<Option<f64>> {
        match statistic {
            Statistic::Mean => self.mean(),
            Statistic::Std => self.std(1),
            Statistic::Var => self.var(1),
            Statistic::Sum => self.sum(),
            Statistic::Min => self.min(),
            Statistic::Max => self.max(),
            Statistic::Median => self.median(),
        }
    }
}

/// Extension trait to add window operations to numeric Series
pub trait WindowExt {
    /// Create a rolling window
    fn rolling(&self, window_size: usize) -> Result<Rolling>;
}

impl<T> WindowExt for Series<T>
where
    T: std::fmt::Debug + Clone + ToPrimitive,
{
    fn rolling(&self, window_size: usize) -> Result<Rolling> {
        Rolling::new(self.to_f64(), window_size)
    }
}
