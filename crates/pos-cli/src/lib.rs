//! CLI library components for the POS transaction normalizer.

pub mod logging;
pub mod pipeline;
