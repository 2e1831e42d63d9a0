//! File-backed glue between the graph builder and the output plan.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;

use crate::graph::{BuildStats, EdgeDescription, GraphBuilder};
use crate::output::OutputPlan;
use crate::policy::AddressPolicy;
use crate::serializer;

/// Reads the whole log at `log_path` into a deduplicated edge set.
pub fn build_graph(
    policy: &AddressPolicy,
    log_path: &Path,
) -> anyhow::Result<(HashSet<EdgeDescription>, BuildStats)> {
    let log = File::open(log_path)
        .with_context(|| format!("failed to open log {}", log_path.display()))?;

    let mut builder = GraphBuilder::new(policy);
    builder.accumulate_reader(BufReader::new(log))?;

    let stats = builder.stats();
    Ok((builder.into_edges(), stats))
}

/// Writes the `digraph` document to the plan's dot file and returns its path.
pub fn write_dot(edges: &HashSet<EdgeDescription>, plan: &OutputPlan) -> anyhow::Result<PathBuf> {
    let path = plan.dot_file();
    info!("Making {}", path.display());

    let file = File::create(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    serializer::write_to(edges, BufWriter::new(file))
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(path)
}
