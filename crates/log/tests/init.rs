//! Global subscriber installation.
//!
//! Everything that installs the global subscriber lives in one test: the
//! subscriber can only be set once per process.

use pretty_assertions::assert_eq;
use tether_log::{Config, DisplayConfig, Format, LogError, LoggerBuilder};

#[test]
fn install_reload_and_reject_second_init() {
    let config = Config {
        level: "info".to_string(),
        format: Format::Json,
        display: DisplayConfig {
            colors: false,
            time: false,
            ..DisplayConfig::default()
        },
        ..Config::default()
    }
    .reloadable();

    let guard = LoggerBuilder::from_config(config).build().unwrap();
    assert!(tracing::dispatcher::has_been_set());

    let handle = guard.reload_handle().unwrap();
    handle.reload("debug").unwrap();
    assert_eq!(handle.current_filter().as_str(), "debug");
    tracing::debug!(target: "tether_log::tests", "visible after reload");

    let error = tether_log::init_with(Config::default()).unwrap_err();
    assert!(matches!(error, LogError::Init(_)));
    assert_eq!(error.code(), "LOG:INIT");
}

#[test]
fn invalid_filter_is_rejected() {
    let error = tether_log::init_with(Config::default().with_level("tether=loud")).unwrap_err();
    assert!(matches!(error, LogError::Filter(_)));
}
