use thiserror::Error;

use crate::config::Layout;

/// Everything that can go wrong while turning a connection log into a graph.
///
/// Only [`HomenetError::RenderInvocation`] ends a run. The other variants are
/// per-line problems that callers log and skip.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HomenetError {
    /// A configuration line is neither a CIDR range nor a valid exclusion.
    #[error("invalid configuration line '{line}': {reason}")]
    ConfigFormat { line: String, reason: String },

    /// A flow endpoint could not be read as an IP address.
    #[error("'{token}' is not a valid IP address")]
    AddressFormat { token: String },

    /// A log line did not carry enough tab separated fields.
    #[error("log line has {fields} fields, at least {required} are required")]
    MalformedRecord { fields: usize, required: usize },

    /// A layout engine could not be launched or exited unsuccessfully.
    #[error("'{layout}' failed: {reason} (is GraphViz installed and on the PATH?)")]
    RenderInvocation { layout: Layout, reason: String },
}
