//! Public-facing crate root – re-exports + one-shot helpers.
//!
//! Renderers produce `(style, text)` [`Segment`]s; painting them on a
//! terminal is left to [`Painter`] or whatever host surface the caller has.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    color::{AnsiCode, ColorError, colorize},
    config::{BarConfig, BarConfigBuilder, ColumnConfig, ColumnConfigBuilder, Overline, Underline},
    data::{Align, BarItem, ColumnItem},
    error::{ChartError, ConfigError},
    scheme::{Catalog, ColorScheme, SchemeDescriptor, SchemeError, SchemeRef},
    segment::{Segment, StyleKey, plain_text},
};

pub use crate::render::{Painter, SparkBar, SparkColumn};

/// Render a sparkline column in one call.
#[must_use]
pub fn spark_column(items: &[ColumnItem], config: &ColumnConfig) -> Vec<Segment> {
    SparkColumn::new(config).render(items)
}

/// Render a stacked bar in one call.
pub fn spark_bar(items: &[BarItem], config: &BarConfig) -> Result<Vec<Segment>, ChartError> {
    SparkBar::new(config).render(items)
}
