//! Run-time configuration objects + fluent builders.
//!
//! Building resolves the colour scheme, so an unknown scheme name or a
//! malformed descriptor is reported before anything is rendered.

use std::ops::RangeInclusive;

use crate::core::{
    error::{ChartError, ConfigError},
    scheme::{Catalog, ColorScheme, SchemeRef},
};

/// Which values get a mark below their glyph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Underline {
    #[default]
    None,
    /// Negative values render as a dot below instead of a ramp glyph.
    Negative,
    /// The series minimum gets a triple underdot.
    Min,
}

/// Which values get a mark above their glyph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overline {
    #[default]
    None,
    /// The series maximum gets three dots above.
    Max,
}

fn check_range(low: Option<f64>, high: Option<f64>) -> Result<(), ConfigError> {
    match (low, high) {
        (Some(low), Some(high)) if low > high => Err(ConfigError::InvalidRange { low, high }),
        _ => Ok(()),
    }
}

// --- Column ---

/// Immutable parameters handed to the column renderer.
#[derive(Debug, Clone)]
pub struct ColumnConfig {
    pub scheme: ColorScheme,
    pub scale_min: Option<f64>,
    pub scale_max: Option<f64>,
    pub underline: Underline,
    pub overline: Overline,
}

impl ColumnConfig {
    #[inline]
    #[must_use]
    pub fn builder() -> ColumnConfigBuilder {
        ColumnConfigBuilder::default()
    }
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            scheme: ColorScheme::Mono,
            scale_min: None,
            scale_max: None,
            underline: Underline::None,
            overline: Overline::None,
        }
    }
}

#[derive(Debug, Default)]
pub struct ColumnConfigBuilder {
    scheme: SchemeRef,
    scale_min: Option<f64>,
    scale_max: Option<f64>,
    underline: Underline,
    overline: Overline,
}

impl ColumnConfigBuilder {
    #[inline]
    #[must_use]
    pub fn scheme(mut self, s: impl Into<SchemeRef>) -> Self {
        self.scheme = s.into();
        self
    }
    #[inline]
    #[must_use]
    pub fn scale_min(mut self, v: f64) -> Self {
        self.scale_min = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn scale_max(mut self, v: f64) -> Self {
        self.scale_max = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn scale(mut self, r: RangeInclusive<f64>) -> Self {
        self.scale_min = Some(*r.start());
        self.scale_max = Some(*r.end());
        self
    }
    #[inline]
    #[must_use]
    pub fn underline(mut self, u: Underline) -> Self {
        self.underline = u;
        self
    }
    #[inline]
    #[must_use]
    pub fn overline(mut self, o: Overline) -> Self {
        self.overline = o;
        self
    }

    pub fn build(self) -> Result<ColumnConfig, ChartError> {
        self.build_with(Catalog::builtin())
    }

    /// Like [`ColumnConfigBuilder::build`], looking names up in `catalog`.
    pub fn build_with(self, catalog: &Catalog) -> Result<ColumnConfig, ChartError> {
        check_range(self.scale_min, self.scale_max)?;
        Ok(ColumnConfig {
            scheme: catalog.resolve(&self.scheme)?,
            scale_min: self.scale_min,
            scale_max: self.scale_max,
            underline: self.underline,
            overline: self.overline,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ColumnConfigBuilder> for Result<ColumnConfig, ChartError> {
    fn from(b: ColumnConfigBuilder) -> Self {
        b.build()
    }
}

// --- Bar ---

/// Immutable parameters handed to the bar renderer.
#[derive(Debug, Clone)]
pub struct BarConfig {
    /// Cells to apportion, always > 0.
    pub width: usize,
    pub scheme: ColorScheme,
    /// Foreground for labels of items without their own.
    pub label_color: Option<String>,
    /// Per-segment floor; also disables small-value elimination.
    pub min_width: Option<usize>,
    /// Disables small-value elimination.
    pub fit_label: bool,
    /// Remap all values into this range before charting.
    pub normalize: Option<(f64, f64)>,
}

impl BarConfig {
    #[inline]
    #[must_use]
    pub fn builder(width: usize) -> BarConfigBuilder {
        BarConfigBuilder::new(width)
    }

    /// Whether small values must be kept on the chart.
    #[inline]
    #[must_use]
    pub fn keeps_small_values(&self) -> bool {
        self.min_width.is_some() || self.fit_label
    }
}

#[derive(Debug)]
pub struct BarConfigBuilder {
    width: usize,
    scheme: SchemeRef,
    label_color: Option<String>,
    min_width: Option<usize>,
    fit_label: bool,
    normalize: Option<(f64, f64)>,
}

impl BarConfigBuilder {
    pub(crate) fn new(width: usize) -> Self {
        Self {
            width,
            scheme: SchemeRef::default(),
            label_color: None,
            min_width: None,
            fit_label: false,
            normalize: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn scheme(mut self, s: impl Into<SchemeRef>) -> Self {
        self.scheme = s.into();
        self
    }
    #[inline]
    #[must_use]
    pub fn label_color(mut self, c: impl Into<String>) -> Self {
        self.label_color = Some(c.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn label_color_opt(mut self, c: Option<&str>) -> Self {
        if let Some(c) = c {
            self.label_color = Some(c.to_owned());
        }
        self
    }
    /// `0` means no floor.
    #[inline]
    #[must_use]
    pub fn min_width(mut self, cells: usize) -> Self {
        self.min_width = (cells > 0).then_some(cells);
        self
    }
    #[inline]
    #[must_use]
    pub fn fit_label(mut self, on: bool) -> Self {
        self.fit_label = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn normalize(mut self, r: RangeInclusive<f64>) -> Self {
        self.normalize = Some((*r.start(), *r.end()));
        self
    }

    pub fn build(self) -> Result<BarConfig, ChartError> {
        self.build_with(Catalog::builtin())
    }

    /// Like [`BarConfigBuilder::build`], looking names up in `catalog`.
    pub fn build_with(self, catalog: &Catalog) -> Result<BarConfig, ChartError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth.into());
        }
        if let Some((low, high)) = self.normalize {
            check_range(Some(low), Some(high))?;
        }
        Ok(BarConfig {
            width: self.width,
            scheme: catalog.resolve(&self.scheme)?,
            label_color: self.label_color,
            min_width: self.min_width,
            fit_label: self.fit_label,
            normalize: self.normalize,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<BarConfigBuilder> for Result<BarConfig, ChartError> {
    fn from(b: BarConfigBuilder) -> Self {
        b.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scheme::SchemeError;

    #[test]
    fn column_defaults_to_mono() {
        let cfg = ColumnConfig::builder().build().unwrap();
        assert_eq!(cfg.scheme, ColorScheme::Mono);
        assert_eq!(cfg.underline, Underline::None);
    }

    #[test]
    fn inverted_scale_is_rejected_but_flat_scale_is_not() {
        let err = ColumnConfig::builder().scale(5.0..=1.0).build().unwrap_err();
        assert!(matches!(
            err,
            ChartError::Config(ConfigError::InvalidRange { .. })
        ));
        assert!(ColumnConfig::builder().scale(2.0..=2.0).build().is_ok());
    }

    #[test]
    fn scheme_errors_surface_at_build() {
        let err = BarConfig::builder(10).scheme("nope").build().unwrap_err();
        assert!(matches!(
            err,
            ChartError::Scheme(SchemeError::UnknownScheme(ref n)) if n == "nope"
        ));
    }

    #[test]
    fn zero_width_bar_is_rejected() {
        assert!(matches!(
            BarConfig::builder(0).build(),
            Err(ChartError::Config(ConfigError::ZeroWidth))
        ));
    }

    #[test]
    fn zero_min_width_means_no_floor() {
        let cfg = BarConfig::builder(8).min_width(0).build().unwrap();
        assert_eq!(cfg.min_width, None);
        assert!(!cfg.keeps_small_values());
        let cfg = BarConfig::builder(8).min_width(2).build().unwrap();
        assert!(cfg.keeps_small_values());
    }

    #[test]
    fn builder_converts_into_result() {
        let cfg: Result<BarConfig, ChartError> = BarConfig::builder(4).scheme("signed").into();
        assert!(matches!(cfg.unwrap().scheme, ColorScheme::Rules(_)));
    }
}
