//! CLI library components for the topic-modelling toolkit.

pub mod inputs;
pub mod logging;
