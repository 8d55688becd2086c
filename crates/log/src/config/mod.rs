//! Configuration types and builders
//!
//! - `base`: `Config`, `Format`
//! - `display`: writer and display toggles
//! - `presets`: environment, development and production setups

mod base;
mod display;
mod presets;

pub use base::{Config, Format};
pub use display::{DisplayConfig, WriterConfig};
pub use presets::{ENV_FILTER, ENV_FORMAT};
