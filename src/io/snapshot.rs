//! JSON snapshot cache for loaded tables.
//!
//! A snapshot stores the column order and every cell, so a table read once
//! from a slow source can be reloaded without re-parsing the workbook.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::frame::DataFrame;

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    columns: Vec<String>,
    // Column-major, aligned with `columns`
    data: Vec<Vec<Cell>>,
}

/// Write a DataFrame to a JSON snapshot file
pub fn write_snapshot<P: AsRef<Path>>(df: &DataFrame, path: P) -> Result<()> {
    let columns: Vec<String> = df.column_names().to_vec();
    let mut data = Vec::with_capacity(columns.len());
    for name in &columns {
        data.push(df.column(name)?.to_vec());
    }
    let snapshot = Snapshot { columns, data };

    let file = File::create(path.as_ref()).map_err(Error::Io)?;
    serde_json::to_writer(BufWriter::new(file), &snapshot).map_err(Error::Json)?;
    Ok(())
}

/// Read a DataFrame back from a JSON snapshot file
pub fn read_snapshot<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
    let file = File::open(path.as_ref()).map_err(Error::Io)?;
    let snapshot: Snapshot = serde_json::from_reader(BufReader::new(file)).map_err(Error::Json)?;

    if snapshot.columns.len() != snapshot.data.len() {
        return Err(Error::LengthMismatch {
            expected: snapshot.columns.len(),
            found: snapshot.data.len(),
        });
    }

    DataFrame::from_columns(snapshot.columns.into_iter().zip(snapshot.data))
}
