//! Cross-crate scenarios for the homenet pipeline.

#[cfg(test)]
mod pipeline;
