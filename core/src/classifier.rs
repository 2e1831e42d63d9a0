//! Edge labels and colors.

use std::fmt;

use homenet_common::network::flow::{FlowRecord, Protocol};

/// TCP services that move files or give remote access. Drawn in red.
pub const REMOTE_ACCESS_SERVICES: &[&str] = &[
    "ftp",
    "ftp-data",
    "ssh",
    "scp",
    "telnet",
    "ms-wbt-server",
    "tftp",
    "ni-ftp",
    "sftp",
    "bftp",
    "subntbcst_tftp",
    "mftp",
    "ftp-agent",
    "pftp",
    "ftps-data",
    "ftps",
    "tftp-mcast",
    "etftp",
    "utsftp",
    "aaftp",
    "gsiftp",
    "odette-ftp",
    "odette-ftps",
    "tftps",
    "kftp",
    "kftp-data",
    "mcftp",
    "netconf-ssh",
    "sdo-ssh",
    "ssh-mgmt",
    "rtelnet",
    "telnets",
    "skytelnet",
    "hp-3000-telnet",
    "tl1-telnet",
    "telnetcpcd",
    "scpi-telnet",
    "ktelnet",
    "rcp",
];

const TLS_SERVICE: &str = "ssl";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeColor {
    Black,
    Blue,
    Cyan,
    Red,
    Orange,
    Purple,
}

impl EdgeColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeColor::Black => "black",
            EdgeColor::Blue => "blue",
            EdgeColor::Cyan => "cyan",
            EdgeColor::Red => "red",
            EdgeColor::Orange => "orange",
            EdgeColor::Purple => "purple",
        }
    }
}

impl fmt::Display for EdgeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeAttributes {
    pub label: String,
    pub color: EdgeColor,
}

pub fn is_remote_access(service: &str) -> bool {
    REMOTE_ACCESS_SERVICES.contains(&service)
}

fn tcp_color(service: &str) -> EdgeColor {
    if is_remote_access(service) {
        EdgeColor::Red
    } else if service == TLS_SERVICE {
        EdgeColor::Cyan
    } else {
        EdgeColor::Blue
    }
}

/// Derives the label and color of the edge drawn for `record`.
///
/// ICMP records show `type:code` where other protocols show the destination
/// port.
pub fn classify(record: &FlowRecord<'_>) -> EdgeAttributes {
    let (color, dst_port) = match &record.protocol {
        Protocol::Tcp => (tcp_color(record.service), record.dst_port.to_string()),
        Protocol::Udp => (EdgeColor::Orange, record.dst_port.to_string()),
        Protocol::Icmp => (
            EdgeColor::Purple,
            format!("{}:{}", record.src_port, record.dst_port),
        ),
        Protocol::Other(_) => (EdgeColor::Black, record.dst_port.to_string()),
    };

    EdgeAttributes {
        label: format!(
            "dpt:{}/{}/{} {}",
            dst_port, record.protocol, record.service, record.state
        ),
        color,
    }
}
