use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use simple_excel_writer::{Row, Workbook};

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::frame::DataFrame;
use crate::series::Series;

/// Read a DataFrame from an Excel (.xlsx) file
///
/// # Arguments
///
/// * `path` - Path to the Excel file
/// * `sheet_name` - Name of the sheet to read. If None, reads the first sheet
/// * `header` - Whether a header row exists. If true, treats the first row as header
/// * `skip_rows` - Number of rows to skip before starting to read
/// * `use_cols` - Column names to read. If None, reads all columns
pub fn read_excel<P: AsRef<Path>>(
    path: P,
    sheet_name: Option<&str>,
    header: bool,
    skip_rows: usize,
    use_cols: Option<&[&str]>,
) -> Result<DataFrame> {
    let mut workbook: Xlsx<BufReader<File>> = open_workbook(path.as_ref())
        .map_err(|e| Error::IoError(format!("Could not open Excel file: {}", e)))?;

    // Sheet name (first sheet if not specified)
    let sheet_name = match sheet_name {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .ok_or_else(|| Error::IoError("Excel file has no sheets".to_string()))?
            .clone(),
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| Error::IoError(format!("Could not read sheet '{}': {}", sheet_name, e)))?;

    // Column names (headers)
    let mut column_names: Vec<String> = Vec::new();
    if header {
        if let Some(header_row) = range.rows().nth(skip_rows) {
            for cell in header_row {
                column_names.push(cell.to_string());
            }
        }
    } else if let Some(first_row) = range.rows().next() {
        for i in 0..first_row.len() {
            column_names.push(format!("Column{}", i + 1));
        }
    }

    // Which column positions to keep
    let use_cols_indices: Option<Vec<usize>> = use_cols.map(|cols| {
        cols.iter()
            .filter_map(|col| column_names.iter().position(|name| name == col))
            .collect()
    });

    let start_row = if header { skip_rows + 1 } else { skip_rows };
    let mut column_data: Vec<Vec<Cell>> = vec![Vec::new(); column_names.len()];

    for row in range.rows().skip(start_row) {
        for (col_idx, data) in column_data.iter_mut().enumerate() {
            // Rows can be ragged; pad short ones with missing values
            let cell = row.get(col_idx).map_or(Cell::Empty, cell_from_excel);
            data.push(cell);
        }
    }

    let mut df = DataFrame::new();
    for (col_idx, cells) in column_data.into_iter().enumerate() {
        if let Some(ref indices) = use_cols_indices {
            if !indices.contains(&col_idx) {
                continue;
            }
        }
        let col_name = column_names[col_idx].clone();
        let series = Series::new(cells, Some(col_name.clone()))?;
        df.add_column(col_name, series)?;
    }

    Ok(df)
}

/// Map a calamine cell to a table cell, re-parsing text so numeric-looking
/// strings come back as numbers
fn cell_from_excel(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Int(v) => Cell::Int(*v),
        Data::Float(v) => Cell::Float(*v),
        Data::Bool(b) => Cell::Bool(*b),
        Data::String(s) => Cell::from_field(s),
        other => Cell::Text(other.to_string()),
    }
}

/// Write a DataFrame to an Excel (.xlsx) file as the named sheet
///
/// If the file already exists, its other sheets are carried over and the new
/// sheet is appended (a sheet with the same name is replaced). The xlsx
/// writer cannot append in place, so existing sheets are read back and the
/// workbook is rewritten whole.
pub fn write_excel<P: AsRef<Path>>(df: &DataFrame, path: P, sheet_name: Option<&str>) -> Result<()> {
    let path = path.as_ref();
    let sheet_name = sheet_name.unwrap_or("Sheet1");

    let mut carried: Vec<(String, Vec<Vec<String>>)> = Vec::new();
    if path.exists() {
        let mut workbook: Xlsx<BufReader<File>> = open_workbook(path)
            .map_err(|e| Error::IoError(format!("Could not open Excel file: {}", e)))?;
        for name in workbook.sheet_names().to_owned() {
            if name == sheet_name {
                log::warn!("replacing existing sheet '{}'", name);
                continue;
            }
            let range = workbook
                .worksheet_range(&name)
                .map_err(|e| Error::IoError(format!("Could not read sheet '{}': {}", name, e)))?;
            let rows = range
                .rows()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect();
            carried.push((name, rows));
        }
    }

    let path_str = path
        .to_str()
        .ok_or_else(|| Error::IoError("Could not convert file path to string".to_string()))?;
    let mut workbook = Workbook::create(path_str);

    for (name, rows) in &carried {
        let mut sheet = workbook.create_sheet(name);
        workbook.write_sheet(&mut sheet, |sheet_writer| {
            for row in rows {
                let fields: Vec<&str> = row.iter().map(|s| s.as_str()).collect();
                sheet_writer.append_row(Row::from_iter(fields.iter().cloned()))?;
            }
            Ok(())
        })?;
    }

    let mut sheet = workbook.create_sheet(sheet_name);
    let headers: Vec<String> = df.column_names().to_vec();
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(df.row_count());
    for i in 0..df.row_count() {
        rows.push(df.row(i)?.iter().map(Cell::to_field).collect());
    }
    workbook.write_sheet(&mut sheet, |sheet_writer| {
        let header_refs: Vec<&str> = headers.iter().map(|s| s.as_str()).collect();
        sheet_writer.append_row(Row::from_iter(header_refs.iter().cloned()))?;
        for row in &rows {
            let fields: Vec<&str> = row.iter().map(|s| s.as_str()).collect();
            sheet_writer.append_row(Row::from_iter(fields.iter().cloned()))?;
        }
        Ok(())
    })?;

    workbook
        .close()
        .map_err(|e| Error::IoError(format!("Could not save Excel file: {}", e)))?;

    Ok(())
}
