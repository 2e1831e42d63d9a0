//! # Home Ranges
//!
//! A home range is one CIDR block (IPv4 or IPv6) that counts as "internal" to
//! the monitored network. Ranges are read from the configuration file once and
//! never change afterwards.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use pnet::ipnetwork::IpNetwork;

use crate::error::HomenetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HomeRange {
    network: IpNetwork,
}

impl HomeRange {
    pub fn new(network: IpNetwork) -> Self {
        Self { network }
    }

    pub fn network(&self) -> IpNetwork {
        self.network
    }

    /// Addresses of the other family are never contained.
    pub fn contains(&self, addr: IpAddr) -> bool {
        self.network.contains(addr)
    }
}

impl FromStr for HomeRange {
    type Err = HomenetError;

    /// Parses CIDR notation like "192.168.1.0/24" or "fd00::/8".
    ///
    /// A bare address is a single-host range. Host bits set below the prefix
    /// (e.g. "192.168.1.7/24") are rejected instead of being silently masked.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let network = IpNetwork::from_str(s).map_err(|e| HomenetError::ConfigFormat {
            line: s.to_string(),
            reason: e.to_string(),
        })?;

        if network.ip() != network.network() {
            return Err(HomenetError::ConfigFormat {
                line: s.to_string(),
                reason: format!("host bits set, did you mean {}/{}?", network.network(), network.prefix()),
            });
        }

        Ok(Self::new(network))
    }
}

impl fmt::Display for HomeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.network)
    }
}

/// Parses a flow endpoint, keeping the offending token on failure.
pub fn parse_addr(token: &str) -> Result<IpAddr, HomenetError> {
    token.parse::<IpAddr>().map_err(|_| HomenetError::AddressFormat {
        token: token.to_string(),
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
