//! Adapters to the outside world (filesystem, YAML)

pub mod config;
