//! proxyprobe - verify that a proxy forwards traffic by fetching one URL through it.

pub mod cli;
pub mod core;
