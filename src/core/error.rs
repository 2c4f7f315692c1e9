//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::{data::ParseValueError, label::LabelError, scheme::SchemeError};

/// Precise configuration faults.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ZeroWidth,
    InvalidRange { low: f64, high: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroWidth => f.write_str("bar width must be at least one cell"),
            ConfigError::InvalidRange { low, high } => {
                write!(f, "range low {low} must be <= high {high}")
            }
        }
    }
}
impl Error for ConfigError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum ChartError {
    Io(io::Error),
    Parse(ParseValueError),
    Scheme(SchemeError),
    Config(ConfigError),
    Label(LabelError),
    /// A bar chart needs at least one item to apportion cells to.
    EmptyData,
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::Io(e) => write!(f, "{e}"),
            ChartError::Parse(e) => write!(f, "{e}"),
            ChartError::Scheme(e) => write!(f, "{e}"),
            ChartError::Config(e) => write!(f, "{e}"),
            ChartError::Label(e) => write!(f, "{e}"),
            ChartError::EmptyData => f.write_str("nothing to chart: no items given"),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ChartError::Io(e) => Some(e),
            ChartError::Parse(e) => Some(e),
            ChartError::Scheme(e) => Some(e),
            ChartError::Config(e) => Some(e),
            ChartError::Label(e) => Some(e),
            ChartError::EmptyData => None,
        }
    }
}

// automatic conversions
impl From<io::Error> for ChartError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ParseValueError> for ChartError {
    fn from(e: ParseValueError) -> Self {
        Self::Parse(e)
    }
}
impl From<SchemeError> for ChartError {
    fn from(e: SchemeError) -> Self {
        Self::Scheme(e)
    }
}
impl From<ConfigError> for ChartError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
impl From<LabelError> for ChartError {
    fn from(e: LabelError) -> Self {
        Self::Label(e)
    }
}
