//! Pure domain types with no I/O dependencies

pub mod models;
