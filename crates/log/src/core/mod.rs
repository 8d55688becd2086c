//! Core types shared by the logging crate

pub mod error;

pub use error::{LogError, LogResult};
