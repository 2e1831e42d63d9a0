//! Address membership with exclusions.
//!
//! The configuration file lists one home range per line. Lines starting with
//! `EXCLUDE` veto a single address instead:
//!
//! ```text
//! # home network
//! 192.168.1.0/24
//! fd00::/8
//! EXCLUDE 192.168.1.1
//! ```

use std::collections::HashSet;
use std::fs;
use std::net::IpAddr;
use std::path::Path;

use anyhow::Context;
use homenet_common::error::HomenetError;
use homenet_common::network::range::{HomeRange, parse_addr};
use tracing::{debug, info, warn};

const COMMENT_MARKER: char = '#';
const EXCLUDE_MARKER: &str = "EXCLUDE";
/// Counted with the line terminator, shorter lines are blank or truncated.
const MIN_LINE_LEN: usize = 7;

#[derive(Debug, Clone, Default)]
pub struct AddressPolicy {
    home_ranges: Vec<HomeRange>,
    exclusions: HashSet<String>,
}

/// What a single configuration line contributes.
#[derive(Debug, PartialEq, Eq)]
enum ConfigEntry {
    Range(HomeRange),
    Exclude(String),
}

impl AddressPolicy {
    pub fn new(home_ranges: Vec<HomeRange>, exclusions: HashSet<String>) -> Self {
        Self {
            home_ranges,
            exclusions,
        }
    }

    /// Builds a policy from configuration text.
    ///
    /// Lines that cannot be interpreted are logged and skipped.
    pub fn build(config: &str) -> Self {
        let mut policy = Self::default();

        for raw in config.split_inclusive('\n') {
            match parse_entry(raw) {
                Ok(Some(ConfigEntry::Range(range))) => policy.home_ranges.push(range),
                Ok(Some(ConfigEntry::Exclude(addr))) => {
                    policy.exclusions.insert(addr);
                }
                Ok(None) => {}
                Err(e) => warn!("Skipping configuration entry: {e}"),
            }
        }

        info!(
            "{} home ranges, {} excluded addresses",
            policy.home_ranges.len(),
            policy.exclusions.len()
        );
        policy
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let config = fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration {}", path.display()))?;
        Ok(Self::build(&config))
    }

    pub fn home_ranges(&self) -> &[HomeRange] {
        &self.home_ranges
    }

    pub fn exclusions(&self) -> &HashSet<String> {
        &self.exclusions
    }

    /// Exclusions match the literal token from the log, not the parsed address.
    pub fn is_excluded(&self, token: &str) -> bool {
        self.exclusions.contains(token)
    }

    /// True if any home range contains `addr`.
    pub fn is_home(&self, addr: IpAddr) -> bool {
        self.home_ranges.iter().any(|range| range.contains(addr))
    }

    /// Decides whether a flow stays on the home network.
    ///
    /// Both endpoints must be non-excluded and inside a home range, though not
    /// necessarily the same one. Tokens that are not IP addresses are never
    /// internal.
    pub fn is_internal_flow(&self, source: &str, destination: &str) -> bool {
        if self.is_excluded(source) || self.is_excluded(destination) {
            return false;
        }

        match self.endpoints_are_home(source, destination) {
            Ok(internal) => internal,
            Err(e) => {
                debug!("Treating flow {source} -> {destination} as external: {e}");
                false
            }
        }
    }

    fn endpoints_are_home(&self, source: &str, destination: &str) -> Result<bool, HomenetError> {
        if !self.is_home(parse_addr(source)?) {
            return Ok(false);
        }
        Ok(self.is_home(parse_addr(destination)?))
    }
}

/// Interprets one raw configuration line, terminator included.
fn parse_entry(raw: &str) -> Result<Option<ConfigEntry>, HomenetError> {
    if raw.starts_with(COMMENT_MARKER) || raw.len() < MIN_LINE_LEN {
        return Ok(None);
    }

    let line = raw.trim_end_matches(['\r', '\n']);

    if line.starts_with(EXCLUDE_MARKER) {
        return match line.split_whitespace().nth(1) {
            Some(addr) => Ok(Some(ConfigEntry::Exclude(addr.to_string()))),
            None => Err(HomenetError::ConfigFormat {
                line: line.to_string(),
                reason: "EXCLUDE needs an address".to_string(),
            }),
        };
    }

    line.trim().parse::<HomeRange>().map(|range| Some(ConfigEntry::Range(range)))
}
