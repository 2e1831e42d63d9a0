//! # homenet core
//!
//! Filters a Zeek connection log down to internal-to-internal flows and turns
//! them into a GraphViz document.
//!
//! * [`policy`]: which addresses are "home".
//! * [`parser`]: one log line into one [`FlowRecord`](homenet_common::network::flow::FlowRecord).
//! * [`classifier`]: edge label and color rules.
//! * [`graph`]: the deduplicating edge accumulator.
//! * [`serializer`]: the `digraph` document.
//! * [`output`], [`pipeline`] and [`render`]: where artifacts go and how layout engines are launched.

pub mod classifier;
pub mod graph;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod policy;
pub mod render;
pub mod serializer;
