//! Format layer creation

use tracing_subscriber::Registry;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::{Layer, Layered};

use super::reload::FilterLayer;
use crate::config::{DisplayConfig, Format};

/// Subscriber the format layer sits on: registry plus filter
pub(super) type Filtered = Layered<FilterLayer, Registry>;

pub(super) type FmtLayer = Box<dyn Layer<Filtered> + Send + Sync + 'static>;

/// Box `$layer`, dropping timestamps unless `$time` is set
macro_rules! boxed_with_timer {
    ($layer:expr, $time:expr) => {{
        let layer = $layer;
        let boxed: FmtLayer = if $time {
            Box::new(layer)
        } else {
            Box::new(layer.without_time())
        };
        boxed
    }};
}

pub(super) fn create_fmt_layer(
    format: Format,
    display: &DisplayConfig,
    writer: BoxMakeWriter,
) -> FmtLayer {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(display.colors)
        .with_target(display.target)
        .with_file(display.source)
        .with_line_number(display.source)
        .with_thread_ids(display.thread_ids)
        .with_thread_names(display.thread_names);

    match format {
        Format::Pretty => boxed_with_timer!(layer.pretty(), display.time),
        Format::Compact => boxed_with_timer!(layer.compact(), display.time),
        Format::Json => boxed_with_timer!(
            layer
                .json()
                .with_current_span(true)
                .flatten_event(display.flatten),
            display.time
        ),
    }
}
