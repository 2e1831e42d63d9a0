//! The edge accumulator.
//!
//! Every internal flow becomes one edge statement. Statements are kept in a
//! set, so flows that render identically collapse into a single edge and the
//! number of raw flows behind an edge is not kept.

use std::collections::HashSet;
use std::io::BufRead;
use std::str::Utf8Error;

use anyhow::Context;
use homenet_common::network::flow::FlowRecord;
use tracing::{debug, info};

use crate::classifier::{self, EdgeAttributes};
use crate::parser;
use crate::policy::AddressPolicy;

/// One serialized `"A" -> "B" [label="...", color="..."]` statement.
pub type EdgeDescription = String;

/// What happened to a single log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Header,
    Malformed,
    External,
    Added,
    Duplicate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub lines: usize,
    pub headers: usize,
    pub malformed: usize,
    pub external: usize,
    /// Internal flows seen, duplicates included.
    pub internal: usize,
    pub edges: usize,
}

pub fn describe_edge(record: &FlowRecord<'_>, attrs: &EdgeAttributes) -> EdgeDescription {
    format!(
        "\"{}\" -> \"{}\" [label=\"{}\", color=\"{}\"]",
        record.src_addr, record.dst_addr, attrs.label, attrs.color
    )
}

pub struct GraphBuilder<'p> {
    policy: &'p AddressPolicy,
    edges: HashSet<EdgeDescription>,
    stats: BuildStats,
}

impl<'p> GraphBuilder<'p> {
    pub fn new(policy: &'p AddressPolicy) -> Self {
        Self {
            policy,
            edges: HashSet::new(),
            stats: BuildStats::default(),
        }
    }

    /// Runs one log line through parse, filter and classify.
    pub fn accumulate_line(&mut self, line: &str) -> LineOutcome {
        self.stats.lines += 1;

        let outcome = match parser::parse_line(line) {
            Ok(None) => LineOutcome::Header,
            Err(e) => {
                debug!("Skipping line {}: {e}", self.stats.lines);
                LineOutcome::Malformed
            }
            Ok(Some(record)) if !self.policy.is_internal_flow(record.src_addr, record.dst_addr) => {
                LineOutcome::External
            }
            Ok(Some(record)) => {
                let attrs = classifier::classify(&record);
                if self.edges.insert(describe_edge(&record, &attrs)) {
                    LineOutcome::Added
                } else {
                    LineOutcome::Duplicate
                }
            }
        };

        match outcome {
            LineOutcome::Header => self.stats.headers += 1,
            LineOutcome::Malformed => self.stats.malformed += 1,
            LineOutcome::External => self.stats.external += 1,
            LineOutcome::Added | LineOutcome::Duplicate => self.stats.internal += 1,
        }
        self.stats.edges = self.edges.len();

        outcome
    }

    pub fn accumulate<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.accumulate_line(line.as_ref());
        }
    }

    /// Reads a whole log. Only I/O failures abort; a line that is not UTF-8
    /// counts as malformed.
    pub fn accumulate_reader<R: BufRead>(&mut self, mut reader: R) -> anyhow::Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .with_context(|| format!("failed to read log line {}", self.stats.lines + 1))?;
            if read == 0 {
                break;
            }
            match std::str::from_utf8(&buf) {
                Ok(line) => {
                    self.accumulate_line(line);
                }
                Err(e) => self.skip_undecodable(e),
            }
        }

        info!(
            "{} internal flows mapped to {} edges ({} lines read)",
            self.stats.internal, self.stats.edges, self.stats.lines
        );
        Ok(())
    }

    fn skip_undecodable(&mut self, err: Utf8Error) {
        self.stats.lines += 1;
        self.stats.malformed += 1;
        debug!("Skipping line {}: {err}", self.stats.lines);
    }

    pub fn edges(&self) -> &HashSet<EdgeDescription> {
        &self.edges
    }

    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    pub fn into_edges(self) -> HashSet<EdgeDescription> {
        self.edges
    }
}
