//! Zeek `conn.log` line parsing.
//!
//! Only the TSV flavour of the log is understood. Header lines (`#separator`,
//! `#fields`, ...) are skipped.

use homenet_common::error::HomenetError;
use homenet_common::network::flow::{FlowRecord, Protocol};

const COMMENT_MARKER: char = '#';
const FIELD_SEPARATOR: char = '\t';

const TS: usize = 0;
const SRC_ADDR: usize = 2;
const SRC_PORT: usize = 3;
const DST_ADDR: usize = 4;
const DST_PORT: usize = 5;
const PROTO: usize = 6;
const SERVICE: usize = 7;
const CONN_STATE: usize = 11;

/// Fields needed to reach the connection state column.
pub const REQUIRED_FIELDS: usize = CONN_STATE + 1;

/// Parses one log line.
///
/// Returns `Ok(None)` for headers and blank lines, and
/// [`HomenetError::MalformedRecord`] when the state column is missing.
pub fn parse_line(line: &str) -> Result<Option<FlowRecord<'_>>, HomenetError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.starts_with(COMMENT_MARKER) || line.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() < REQUIRED_FIELDS {
        return Err(HomenetError::MalformedRecord {
            fields: fields.len(),
            required: REQUIRED_FIELDS,
        });
    }

    Ok(Some(FlowRecord {
        ts: fields[TS],
        src_addr: fields[SRC_ADDR],
        src_port: fields[SRC_PORT],
        dst_addr: fields[DST_ADDR],
        dst_port: fields[DST_PORT],
        protocol: Protocol::from(fields[PROTO]),
        service: fields[SERVICE],
        state: fields[CONN_STATE],
    }))
}
