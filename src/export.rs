//! Semicolon-delimited schedule export
//!
//! One header line `month;payment;interest;principal;balance`, then one line per row.
//! Floats are written in shortest round-trip form, so reading a file back gives
//! bit-identical rows.

use csv::{ReaderBuilder, WriterBuilder};
use log::info;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::{MortgageError, Result};
use crate::schedule::{Schedule, ScheduleRow};

pub const DELIMITER: u8 = b';';

/// Default file name used by the CLI
pub const DEFAULT_EXPORT_FILE: &str = "mortgage_schedule.csv";

/// Write the header and all rows to `writer`
pub fn write_schedule<W: Write>(writer: W, rows: &[ScheduleRow]) -> Result<()> {
    let mut wtr = WriterBuilder::new().delimiter(DELIMITER).from_writer(writer);

    if rows.is_empty() {
        // serialize() emits the header lazily, so an empty schedule needs it spelled out
        wtr.write_record(["month", "payment", "interest", "principal", "balance"])?;
    }
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn schedule_to_string(rows: &[ScheduleRow]) -> Result<String> {
    let mut buf = Vec::new();
    write_schedule(&mut buf, rows)?;
    Ok(String::from_utf8(buf)?)
}

/// Read rows back, checking that months run 1, 2, 3, ...
pub fn read_schedule<R: Read>(reader: R) -> Result<Schedule> {
    let mut rdr = ReaderBuilder::new().delimiter(DELIMITER).from_reader(reader);
    let mut rows = Vec::new();

    for result in rdr.deserialize() {
        let row: ScheduleRow = result?;
        let expected = rows.len() as u32 + 1;
        if row.month != expected {
            return Err(MortgageError::MalformedRow {
                line: expected as u64 + 1,
                message: format!("expected month {}, found {}", expected, row.month),
            });
        }
        rows.push(row);
    }

    Ok(rows)
}

pub fn save_schedule<P: AsRef<Path>>(path: P, rows: &[ScheduleRow]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_schedule(file, rows)?;
    info!("wrote {} schedule rows to {}", rows.len(), path.display());
    Ok(())
}

pub fn load_schedule<P: AsRef<Path>>(path: P) -> Result<Schedule> {
    let file = File::open(path)?;
    read_schedule(file)
}
