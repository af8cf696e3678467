//! CSV file I/O
//!
//! Low-level helpers for the flat data file: header creation, row reading,
//! appending, and full rewrites through a temporary file.
//!
//! Fields are never quoted or escaped. A field containing the delimiter is
//! written as-is and splits into extra columns when read back.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use serde::Serialize;

use crate::error::ExpenseError;

/// Header row of the data file
pub const HEADER: [&str; 5] = ["id", "date", "category", "note", "amount"];

/// Build the writer used for every data row
fn row_writer<W: Write>(inner: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(inner)
}

/// Create `path` containing only the header row
pub fn create_with_header<P: AsRef<Path>>(path: P) -> Result<(), ExpenseError> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| ExpenseError::Io(format!("Cannot create {}: {}", path.display(), e)))?;

    let mut writer = row_writer(file);
    writer.write_record(HEADER)?;
    writer
        .flush()
        .map_err(|e| ExpenseError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

/// Read every data row of `path`, skipping the header line
///
/// Rows keep however many fields they have; callers decide what to drop.
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>, ExpenseError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| ExpenseError::Io(format!("Cannot open {}: {}", path.display(), e)))?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(BufReader::new(file));

    let mut rows = Vec::new();
    for result in reader.byte_records() {
        let record = result?;
        rows.push(
            record
                .iter()
                .map(|field| String::from_utf8_lossy(field).into_owned())
                .collect(),
        );
    }

    Ok(rows)
}

/// Append rows to the end of `path`
pub fn append_rows<T, P>(path: P, rows: &[T]) -> Result<(), ExpenseError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| ExpenseError::Io(format!("Cannot append to {}: {}", path.display(), e)))?;

    let mut writer = row_writer(file);
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .flush()
        .map_err(|e| ExpenseError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

/// Replace `path` with a header plus `rows`, writing through `temp_path`
///
/// The temp file is synced and renamed over the original, so a failure part
/// way through leaves the previous contents in place.
pub fn write_rows_atomic<T, P, Q>(path: P, temp_path: Q, rows: &[T]) -> Result<(), ExpenseError>
where
    T: Serialize,
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let path = path.as_ref();
    let temp_path = temp_path.as_ref();

    let file = File::create(temp_path)
        .map_err(|e| ExpenseError::Io(format!("Cannot write {}: {}", temp_path.display(), e)))?;

    let mut writer = row_writer(BufWriter::new(file));
    writer.write_record(HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }

    let mut buffered = writer
        .into_inner()
        .map_err(|e| ExpenseError::Io(format!("Failed to flush data: {}", e.error())))?;
    buffered
        .flush()
        .map_err(|e| ExpenseError::Io(format!("Failed to flush data: {}", e)))?;
    buffered
        .get_ref()
        .sync_all()
        .map_err(|e| ExpenseError::Io(format!("Failed to sync data: {}", e)))?;
    drop(buffered);

    fs::rename(temp_path, path).map_err(|e| {
        let _ = fs::remove_file(temp_path);
        ExpenseError::Io(format!("Failed to replace {}: {}", path.display(), e))
    })?;

    Ok(())
}
