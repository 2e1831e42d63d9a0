//! Types shared between the `homenet` pipeline and its command line.

pub mod config;
pub mod error;
pub mod network;
