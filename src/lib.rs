//! rollrs: rolling-window aggregation over spreadsheet tables.
//!
//! Reads a table from an xlsx sheet or a cached JSON snapshot, appends
//! rolling-statistic columns over one numeric column, clears the computed
//! cells at every window-boundary row, and writes the result back as a new
//! sheet.
//!
//! # Example
//!
//! ```
//! use rollrs::{Cell, DataFrame, Roller, Series, Statistic};
//!
//! let cells: Vec<Cell> = (1..=7).map(|v| Cell::Int(v)).collect();
//! let mut df = DataFrame::new();
//! df.add_column("x".to_string(), Series::new(cells, Some("x".to_string())).unwrap())
//!     .unwrap();
//!
//! let roller = Roller::new(vec![Statistic::Mean, Statistic::Std], "x", 3).unwrap();
//! let result = roller.run(&df).unwrap();
//! assert!(result.contains_column("avg-3"));
//! assert!(result.contains_column("std-3"));
//! ```

pub mod cell;
pub mod error;
pub mod frame;
pub mod io;
pub mod roller;
pub mod series;
pub mod window;

pub use cell::Cell;
pub use error::{Error, Result};
pub use frame::DataFrame;
pub use roller::{select_keep_indices, Roller};
pub use series::Series;
pub use window::{Rolling, Statistic, WindowExt};

/// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
