//! Library side of the `abxstat` command-line tool.

pub mod config;
pub mod logging;
pub mod pipeline;
