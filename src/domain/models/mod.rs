//! Domain models

pub mod config;

pub use config::{PfnoptConfig, RECOGNIZED_KEYS};
