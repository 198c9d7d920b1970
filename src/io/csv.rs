use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, Writer};

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::frame::DataFrame;
use crate::series::Series;

/// Read a DataFrame from a CSV file
pub fn read_csv<P: AsRef<Path>>(path: P, has_header: bool) -> Result<DataFrame> {
    let file = File::open(path.as_ref()).map_err(Error::Io)?;

    // Set up the CSV reader
    let mut rdr = ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    // Get the header row
    let headers: Vec<String> = if has_header {
        rdr.headers()
            .map_err(Error::Csv)?
            .iter()
            .map(|h| h.to_string())
            .collect()
    } else {
        // If there is no header, infer the width from the first row
        match rdr.records().next() {
            Some(first) => {
                let first = first.map_err(Error::Csv)?;
                (0..first.len()).map(|i| format!("column_{}", i)).collect()
            }
            None => return Ok(DataFrame::new()),
        }
    };

    let mut columns: HashMap<String, Vec<Cell>> = HashMap::new();
    for header in &headers {
        columns.insert(header.clone(), Vec::new());
    }

    for result in rdr.records() {
        let record = result.map_err(Error::Csv)?;
        for (i, header) in headers.iter().enumerate() {
            let cell = if i < record.len() {
                Cell::from_field(&record[i])
            } else {
                // Short rows pad out with missing values
                Cell::Empty
            };
            columns.get_mut(header).unwrap().push(cell);
        }
    }

    let mut df = DataFrame::new();
    for header in headers {
        if let Some(values) = columns.remove(&header) {
            let series = Series::new(values, Some(header.clone()))?;
            df.add_column(header, series)?;
        }
    }

    Ok(df)
}

/// Write a DataFrame to a CSV file
pub fn write_csv<P: AsRef<Path>>(df: &DataFrame, path: P) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(Error::Io)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(df.column_names()).map_err(Error::Csv)?;

    for i in 0..df.row_count() {
        let row: Vec<String> = df.row(i)?.iter().map(Cell::to_field).collect();
        wtr.write_record(&row).map_err(Error::Csv)?;
    }

    wtr.flush().map_err(Error::Io)?;
    Ok(())
}
