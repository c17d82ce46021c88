//! Record Reader
//!
//! Reads records one at a time from any `Read` source until the sentinel.

use std::io::{self, Read};

use crate::employee::Employee;
use crate::error::{Result, RosterError};

use super::record::decode_payload;
use super::{HEADER_SIZE, MAGIC, RECORD_TAG, SENTINEL_TAG, VERSION};

/// Sequential reader over a persisted roster stream
pub struct RecordReader<R: Read> {
    reader: R,
    /// Header consumed (or stream found empty)
    started: bool,
    /// No more records will be produced
    done: bool,
    /// The sentinel was seen (as opposed to a bare end of stream)
    reached_sentinel: bool,
    records_read: u64,
}

impl<R: Read> RecordReader<R> {
    /// Wrap a source; nothing is read until the first record is requested
    pub fn new(source: R) -> Self {
        Self {
            reader: source,
            started: false,
            done: false,
            reached_sentinel: false,
            records_read: 0,
        }
    }

    /// Read the next record
    ///
    /// Returns:
    /// - `Ok(Some(employee))` — a valid record
    /// - `Ok(None)` — sentinel reached, or stream ended at a record boundary
    /// - `Err(MalformedRecord)` — truncated or corrupt data
    pub fn next_record(&mut self) -> Result<Option<Employee>> {
        if self.done {
            return Ok(None);
        }

        if !self.started {
            self.started = true;
            if !self.read_header()? {
                self.done = true;
                return Ok(None);
            }
        }

        let tag = match self.read_tag()? {
            Some(tag) => tag,
            None => {
                tracing::warn!(
                    records = self.records_read,
                    "roster stream ended without end-of-records marker"
                );
                self.done = true;
                return Ok(None);
            }
        };

        match tag {
            SENTINEL_TAG => {
                self.reached_sentinel = true;
                self.done = true;
                Ok(None)
            }
            RECORD_TAG => {
                let employee = self.read_record_body()?;
                self.records_read += 1;
                tracing::debug!(id = employee.id, "employee read: {}", employee);
                Ok(Some(employee))
            }
            other => {
                self.done = true;
                Err(RosterError::MalformedRecord(format!(
                    "Unknown record tag: 0x{:02x} after {} records",
                    other, self.records_read
                )))
            }
        }
    }

    /// Whether the end-of-records marker was seen
    pub fn reached_sentinel(&self) -> bool {
        self.reached_sentinel
    }

    /// Number of valid records read so far
    pub fn records_read(&self) -> u64 {
        self.records_read
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Validate the file header. Returns false for a zero-length stream.
    fn read_header(&mut self) -> Result<bool> {
        let first = match self.read_tag()? {
            Some(byte) => byte,
            None => return Ok(false),
        };

        let mut header = [0u8; HEADER_SIZE];
        header[0] = first;
        self.read_exact_or_malformed(&mut header[1..], "file header")?;

        if &header[0..4] != MAGIC {
            self.done = true;
            return Err(RosterError::MalformedRecord(format!(
                "Invalid roster magic: expected EMPR, got {:?}",
                &header[0..4]
            )));
        }

        let version = u16::from_le_bytes([header[4], header[5]]);
        if version != VERSION {
            self.done = true;
            return Err(RosterError::MalformedRecord(format!(
                "Unsupported roster file version: {}",
                version
            )));
        }

        Ok(true)
    }

    /// Read the rest of a record after its tag
    fn read_record_body(&mut self) -> Result<Employee> {
        let mut header = [0u8; 8];
        self.read_exact_or_malformed(&mut header, "record header")?;

        let payload_len = u32::from_le_bytes([header[0], header[1], header[2], header[3]]);
        let crc = u32::from_le_bytes([header[4], header[5], header[6], header[7]]);

        // Grow with the data actually present instead of trusting the length up front
        let mut payload = Vec::new();
        let read = match (&mut self.reader)
            .take(u64::from(payload_len))
            .read_to_end(&mut payload)
        {
            Ok(read) => read,
            Err(e) => {
                self.done = true;
                return Err(e.into());
            }
        };

        if read != payload_len as usize {
            self.done = true;
            return Err(RosterError::MalformedRecord(format!(
                "Truncated record payload after {} records: expected {} bytes, got {}",
                self.records_read, payload_len, read
            )));
        }

        decode_payload(&payload, crc).map_err(|e| {
            self.done = true;
            e
        })
    }

    /// Read one byte, `None` on a clean end of stream
    fn read_tag(&mut self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.done = true;
                    return Err(e.into());
                }
            }
        }
    }

    /// `read_exact`, with a short read reported as a malformed record
    fn read_exact_or_malformed(&mut self, buf: &mut [u8], what: &str) -> Result<()> {
        match self.reader.read_exact(buf) {
            Ok(()) => Ok(()),
            Err(e) => {
                self.done = true;
                if e.kind() == io::ErrorKind::UnexpectedEof {
                    Err(RosterError::MalformedRecord(format!(
                        "Truncated {} after {} records",
                        what, self.records_read
                    )))
                } else {
                    Err(e.into())
                }
            }
        }
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<Employee>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
