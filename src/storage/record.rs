//! Record framing
//!
//! Encodes a single employee as a checksummed frame and back.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::employee::Employee;
use crate::error::{Result, RosterError};

use super::{RECORD_HEADER_SIZE, RECORD_TAG};

/// Encode an employee to a record frame
///
/// Format: tag (1) + payload_len (4) + crc32 (4) + payload
pub fn encode_record(employee: &Employee) -> Result<Bytes> {
    let payload = bincode::serialize(employee)?;

    // The length field is a u32
    let payload_len = u32::try_from(payload.len()).map_err(|_| {
        RosterError::Serialization(format!(
            "Record for id {} does not fit a frame: {} bytes",
            employee.id,
            payload.len()
        ))
    })?;

    let mut frame = BytesMut::with_capacity(RECORD_HEADER_SIZE + payload.len());
    frame.put_u8(RECORD_TAG);
    frame.put_u32_le(payload_len);
    frame.put_u32_le(crc32fast::hash(&payload));
    frame.put_slice(&payload);

    Ok(frame.freeze())
}

/// Decode a complete record frame (tag included)
pub fn decode_record(frame: &[u8]) -> Result<Employee> {
    if frame.len() < RECORD_HEADER_SIZE {
        return Err(RosterError::MalformedRecord(format!(
            "Incomplete record header: expected {} bytes, got {}",
            RECORD_HEADER_SIZE,
            frame.len()
        )));
    }

    let mut buf = frame;
    let tag = buf.get_u8();
    if tag != RECORD_TAG {
        return Err(RosterError::MalformedRecord(format!(
            "Unknown record tag: 0x{:02x}",
            tag
        )));
    }

    let payload_len = buf.get_u32_le();
    let crc = buf.get_u32_le();

    if buf.remaining() != payload_len as usize {
        return Err(RosterError::MalformedRecord(format!(
            "Record payload length mismatch: header says {}, got {}",
            payload_len,
            buf.remaining()
        )));
    }

    decode_payload(buf, crc)
}

/// Verify the checksum and deserialize the payload
pub(super) fn decode_payload(payload: &[u8], expected_crc: u32) -> Result<Employee> {
    let actual_crc = crc32fast::hash(payload);
    if actual_crc != expected_crc {
        return Err(RosterError::MalformedRecord(format!(
            "CRC mismatch: expected 0x{:08x}, got 0x{:08x}",
            expected_crc, actual_crc
        )));
    }

    bincode::deserialize(payload)
        .map_err(|e| RosterError::MalformedRecord(format!("Undecodable record: {}", e)))
}
