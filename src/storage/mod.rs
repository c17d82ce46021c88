//! Storage Module
//!
//! Persisted roster file format.
//!
//! ## Responsibilities
//! - Serialize every roster record sequentially
//! - Terminate the stream with an explicit sentinel
//! - Detect truncation and corruption on read
//! - Replace the roster file only after a complete write
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Header (6 bytes)                                        │
//! │   Magic: "EMPR" (4) | Version: u16 (2)                  │
//! ├─────────────────────────────────────────────────────────┤
//! │ Records (variable)                                      │
//! │   [Tag: 0x01][Len: u32][CRC32: u32][Payload (bincode)]  │
//! │   ... repeated for each employee, roster order ...      │
//! ├─────────────────────────────────────────────────────────┤
//! │ Sentinel (1 byte)                                       │
//! │   [Tag: 0x00]                                           │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! All integers are little-endian. A zero-length stream is an empty roster.

mod file;
mod reader;
mod record;
mod writer;

pub use file::replace_file;
pub use reader::RecordReader;
pub use record::{decode_record, encode_record};
pub use writer::RecordWriter;

// =============================================================================
// Shared Constants (used by record, reader, writer)
// =============================================================================

/// Magic bytes identifying a roster file
pub const MAGIC: &[u8; 4] = b"EMPR";

/// Current file format version
pub const VERSION: u16 = 1;

/// Header size: Magic (4) + Version (2) = 6 bytes
pub const HEADER_SIZE: usize = 6;

/// Tag preceding every serialized employee
pub const RECORD_TAG: u8 = 0x01;

/// Tag marking the end of records
pub const SENTINEL_TAG: u8 = 0x00;

/// Record header size: Tag (1) + Len (4) + CRC (4) = 9 bytes
pub const RECORD_HEADER_SIZE: usize = 9;
