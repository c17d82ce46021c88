//! Record Writer
//!
//! Streams a roster to any `Write` destination.

use std::io::{BufWriter, Write};

use crate::employee::Employee;
use crate::error::{Result, RosterError};

use super::{encode_record, MAGIC, SENTINEL_TAG, VERSION};

/// Writes records sequentially, terminated by the sentinel on `finish()`
pub struct RecordWriter<W: Write> {
    /// Buffered destination
    writer: BufWriter<W>,
    /// Number of records written so far
    records_written: u64,
}

impl<W: Write> RecordWriter<W> {
    /// Create a writer; the header is written immediately
    pub fn new(destination: W) -> Result<Self> {
        let mut writer = BufWriter::new(destination);
        writer.write_all(MAGIC)?;
        writer.write_all(&VERSION.to_le_bytes())?;

        Ok(Self {
            writer,
            records_written: 0,
        })
    }

    /// Append one employee record
    pub fn write_record(&mut self, employee: &Employee) -> Result<()> {
        let frame = encode_record(employee)?;
        self.writer.write_all(&frame)?;
        self.records_written += 1;

        tracing::debug!(id = employee.id, "employee written: {}", employee);
        Ok(())
    }

    /// Number of records written so far
    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    /// Write the sentinel, flush all buffered output and hand back the destination
    pub fn finish(mut self) -> Result<W> {
        self.writer.write_all(&[SENTINEL_TAG])?;
        self.writer.flush()?;

        self.writer
            .into_inner()
            .map_err(|e| RosterError::Io(e.into_error()))
    }
}
