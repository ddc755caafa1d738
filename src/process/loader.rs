/*!
 * Process Record Loader
 * Decodes the fixed-layout binary record stream into process records
 *
 * Layout (50 bytes, little-endian, no header, no padding):
 * priority i8 | name [u8; 24] | process_id i32 | activity_status u8 |
 * cpu_burst_time i32 | base_register i32 | limit_register i64 |
 * number_of_files i32
 */

use super::types::ProcessRecord;
use crate::core::errors::LoadError;
use crate::core::limits::{NAME_LEN, RECORD_SIZE};
use bytes::{Buf, BufMut};
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info};

/// Read every complete record from `path`, up to `max_records` if given
pub fn load_records(
    path: impl AsRef<Path>,
    max_records: Option<usize>,
) -> Result<Vec<ProcessRecord>, LoadError> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if data.len() < RECORD_SIZE {
        return Err(LoadError::MalformedLeadingRecord {
            path: path.to_path_buf(),
            len: data.len(),
            record_size: RECORD_SIZE,
        });
    }

    let records = parse_records(&data, max_records);
    let trailing = data.len() % RECORD_SIZE;
    if trailing != 0 {
        debug!(trailing_bytes = trailing, "Discarding truncated trailing record");
    }
    info!(path = %path.display(), count = records.len(), "Loaded process records");
    Ok(records)
}

/// Decode complete records from `data`; a truncated tail is ignored
pub fn parse_records(data: &[u8], max_records: Option<usize>) -> Vec<ProcessRecord> {
    data.chunks_exact(RECORD_SIZE)
        .take(max_records.unwrap_or(usize::MAX))
        .map(decode_record)
        .collect()
}

fn decode_record(mut buf: &[u8]) -> ProcessRecord {
    let priority = buf.get_i8();
    let mut name = [0u8; NAME_LEN];
    buf.copy_to_slice(&mut name);
    let id = buf.get_i32_le();
    let status = buf.get_u8();
    let remaining_burst = buf.get_i32_le();
    let base_register = buf.get_i32_le();
    let limit_register = buf.get_i64_le();
    let file_count = buf.get_i32_le();

    ProcessRecord {
        priority,
        name,
        id,
        status,
        remaining_burst,
        base_register,
        limit_register,
        file_count,
    }
}

/// Encode a record in the on-disk layout
pub fn encode_record(record: &ProcessRecord) -> [u8; RECORD_SIZE] {
    let mut out = [0u8; RECORD_SIZE];
    let mut buf = &mut out[..];
    buf.put_i8(record.priority);
    buf.put_slice(&record.name);
    buf.put_i32_le(record.id);
    buf.put_u8(record.status);
    buf.put_i32_le(record.remaining_burst);
    buf.put_i32_le(record.base_register);
    buf.put_i64_le(record.limit_register);
    buf.put_i32_le(record.file_count);
    out
}

/// Print every record field by field
pub fn write_dump<W: Write>(records: &[ProcessRecord], out: &mut W) -> io::Result<()> {
    for record in records {
        writeln!(out, "Priority: {}", record.priority)?;
        writeln!(out, "Name: {}", record.name())?;
        writeln!(out, "Process ID: {}", record.id)?;
        writeln!(out, "Activity Status: {}", record.status)?;
        writeln!(out, "CPU Burst Time: {}", record.remaining_burst)?;
        writeln!(out, "Base Register: {}", record.base_register)?;
        writeln!(out, "Limit Register: {}", record.limit_register)?;
        writeln!(out, "Number of Files: {}", record.file_count)?;
        writeln!(out)?;
    }
    Ok(())
}
