use std::fmt::Debug;

use num_traits::ToPrimitive;

use crate::cell::Cell;
use crate::error::{Error, Result};

/// Series struct: 1-dimensional data structure
#[derive(Debug, Clone, PartialEq)]
pub struct Series<T>
where
    T: Debug + Clone,
{
    /// The values in the Series
    values: Vec<T>,
    /// The name of the Series
    name: Option<String>,
}

impl<T> Series<T>
where
    T: Debug + Clone,
{
    /// Create a new Series
    pub fn new(data: Vec<T>, name: Option<String>) -> Result<Self> {
        Ok(Self { values: data, name })
    }

    /// Get the length of the Series
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the Series is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get an element at a specific index
    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    /// Overwrite the element at a specific index
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let size = self.values.len();
        match self.values.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::IndexOutOfBounds { index, size }),
        }
    }

    /// Get a reference to the values in the Series
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Convert Series to Vec
    pub fn to_vec(&self) -> Vec<T> {
        self.values.clone()
    }

    /// Get the name of the Series
    pub fn name(&self) -> Option<&String> {
        self.name.as_ref()
    }
}

// Numeric views used by the rolling-window engine
impl<T> Series<T>
where
    T: Debug + Clone + ToPrimitive,
{
    /// Convert to f64 values, with None for anything that does not cast
    pub fn to_f64(&self) -> Vec<Option<f64>> {
        self.values.iter().map(|v| v.to_f64()).collect()
    }

    /// Calculate the mean of the castable values
    pub fn mean(&self) -> Result<f64> {
        let present: Vec<f64> = self.values.iter().filter_map(|v| v.to_f64()).collect();
        if present.is_empty() {
            return Err(Error::EmptySeries);
        }
        Ok(present.iter().sum::<f64>() / present.len() as f64)
    }
}

impl Series<Cell> {
    /// Numeric view of a cell column: non-numeric and missing cells become None
    pub fn numeric(&self) -> Vec<Option<f64>> {
        self.values.iter().map(|c| c.as_f64()).collect()
    }
}
