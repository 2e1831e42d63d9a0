//! # Flow Records
//!
//! One Zeek `conn.log` line, borrowed from the line it was parsed from.

use std::fmt;

/// Transport protocol column of a connection log.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Protocol {
    Tcp,
    Udp,
    Icmp,
    Other(String),
}

impl From<&str> for Protocol {
    fn from(s: &str) -> Self {
        match s {
            "tcp" => Protocol::Tcp,
            "udp" => Protocol::Udp,
            "icmp" => Protocol::Icmp,
            other => Protocol::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Tcp => f.write_str("tcp"),
            Protocol::Udp => f.write_str("udp"),
            Protocol::Icmp => f.write_str("icmp"),
            Protocol::Other(raw) => f.write_str(raw),
        }
    }
}

/// A single observed flow.
///
/// For ICMP, `src_port` holds the ICMP type and `dst_port` the ICMP code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowRecord<'a> {
    pub ts: &'a str,
    pub src_addr: &'a str,
    pub src_port: &'a str,
    pub dst_addr: &'a str,
    pub dst_port: &'a str,
    pub protocol: Protocol,
    pub service: &'a str,
    pub state: &'a str,
}
