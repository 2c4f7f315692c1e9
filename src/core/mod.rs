//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod label;
pub mod palette;
pub mod scheme;
pub mod segment;
pub mod source;

// re-export frequently-used items for convenience
pub use color::{AnsiCode, ColorError, Layer, colorize};
pub use config::{
    BarConfig, BarConfigBuilder, ColumnConfig, ColumnConfigBuilder, Overline, Underline,
};
pub use data::{Align, BarItem, ColumnItem};
pub use error::{ChartError, ConfigError};
pub use scheme::{Catalog, ColorScheme, SchemeDescriptor, SchemeError, SchemeRef};
pub use segment::{Segment, StyleKey};
pub use source::{ColorSource, Comparator, Condition};
