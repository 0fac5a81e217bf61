//! Library side of the `covid-dash` binary.

pub mod config;
pub mod logging;
pub mod pipeline;
