//! Writer and display configuration

use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Where formatted events go
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriterConfig {
    /// Write to stderr
    #[default]
    Stderr,
    /// Write to stdout
    Stdout,
}

impl WriterConfig {
    pub(crate) fn make_writer(self) -> BoxMakeWriter {
        match self {
            WriterConfig::Stderr => BoxMakeWriter::new(std::io::stderr),
            WriterConfig::Stdout => BoxMakeWriter::new(std::io::stdout),
        }
    }
}

/// Display configuration
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show timestamps
    pub time: bool,
    /// Show source location (`file:line`)
    pub source: bool,
    /// Show target module
    pub target: bool,
    /// Show thread IDs
    pub thread_ids: bool,
    /// Show thread names
    pub thread_names: bool,
    /// Use ANSI colors
    pub colors: bool,
    /// Flatten JSON event fields into the top-level object
    pub flatten: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time: true,
            source: cfg!(debug_assertions),
            target: true,
            thread_ids: false,
            thread_names: false,
            colors: std::io::IsTerminal::is_terminal(&std::io::stderr()),
            flatten: true,
        }
    }
}

impl DisplayConfig {
    /// Apply `TETHER_LOG_TIME` / `TETHER_LOG_SOURCE` / `TETHER_LOG_COLORS`,
    /// then `NO_COLOR`
    pub(super) fn parse_env(&mut self) {
        if let Ok(v) = std::env::var("TETHER_LOG_TIME") {
            self.time = flag(&v);
        }
        if let Ok(v) = std::env::var("TETHER_LOG_SOURCE") {
            self.source = flag(&v);
        }
        if let Ok(v) = std::env::var("TETHER_LOG_COLORS") {
            self.colors = flag(&v);
        }
        if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            self.colors = false;
        }
    }
}

fn flag(value: &str) -> bool {
    value != "0" && !value.eq_ignore_ascii_case("false")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_values() {
        assert!(flag("1"));
        assert!(flag("true"));
        assert!(flag("yes"));
        assert!(!flag("0"));
        assert!(!flag("false"));
        assert!(!flag("FALSE"));
    }

    #[test]
    fn test_writer_defaults_to_stderr() {
        assert_eq!(WriterConfig::default(), WriterConfig::Stderr);
    }
}
