//! Horizontal stacked bar: values share a fixed number of cells, each
//! segment optionally labelled and coloured.
//!
//! ### Pipeline
//! 1. optional remap of every value into the configured `normalize` range
//! 2. small-value elimination (skipped with `min_width` / `fit_label`)
//! 3. proportional apportionment of `width` cells between survivors
//! 4. optional min-width correction
//! 5. per survivor: expand the label template, fit it to the allocation,
//!    pick `fg:bg` colours

use tracing::{debug, warn};

use crate::{
    core::{
        bounds::{normalize, series_bounds},
        config::BarConfig,
        constants::DEFAULT_LABEL_COLOR,
        data::BarItem,
        error::ChartError,
        label::{fit_label, format_label},
        segment::{Segment, StyleKey},
    },
    render::apportion::{Correction, correct_min_width, eliminate_small, proportional},
};

/// Which items made it onto the bar and how wide each one is.
#[derive(Clone, Debug, PartialEq)]
pub struct BarLayout {
    /// Indices into the input, in input order.
    pub survivors: Vec<usize>,
    /// Cells per survivor; sums to the configured width unless every item
    /// was eliminated.
    pub widths: Vec<usize>,
    /// Charted values (after any remap), one per input item.
    pub values: Vec<f64>,
    /// Sum of `values` before elimination.
    pub total: f64,
}

/// Renders [`BarItem`]s with a fixed [`BarConfig`].
#[derive(Debug, Clone, Copy)]
pub struct SparkBar<'a> {
    config: &'a BarConfig,
}

impl<'a> SparkBar<'a> {
    #[must_use]
    pub fn new(config: &'a BarConfig) -> Self {
        Self { config }
    }

    /// Steps 1–4 of the pipeline.
    pub fn layout(&self, items: &[BarItem]) -> Result<BarLayout, ChartError> {
        if items.is_empty() {
            return Err(ChartError::EmptyData);
        }
        let cfg = self.config;

        let mut values: Vec<f64> = items.iter().map(|i| i.value).collect();
        if let Some((a, b)) = cfg.normalize {
            let (v_min, v_max) = series_bounds(values.iter().copied()).unwrap_or((0.0, 0.0));
            for v in &mut values {
                *v = normalize(*v, a, b, v_min, v_max).trunc();
            }
        }
        let total: f64 = values.iter().sum();

        let survivors = eliminate_small(&values, cfg.width, cfg.keeps_small_values());
        if survivors.len() < items.len() {
            debug!(
                dropped = items.len() - survivors.len(),
                kept = survivors.len(),
                "eliminated values too small for one cell"
            );
        }

        let weights: Vec<f64> = survivors.iter().map(|&i| values[i]).collect();
        let mut widths = proportional(cfg.width, &weights);
        if let Some(floor) = cfg.min_width {
            if correct_min_width(&mut widths, floor) == Correction::GaveUp {
                warn!(
                    min_width = floor,
                    width = cfg.width,
                    segments = widths.len(),
                    "min width can't be met for every segment"
                );
            }
        }
        debug!(?survivors, ?widths, total, "bar allocation");

        Ok(BarLayout {
            survivors,
            widths,
            values,
            total,
        })
    }

    /// One segment per surviving item; empty if every item was eliminated.
    pub fn render(&self, items: &[BarItem]) -> Result<Vec<Segment>, ChartError> {
        let layout = self.layout(items)?;
        let cfg = self.config;
        let label_color = cfg.label_color.as_deref().unwrap_or(DEFAULT_LABEL_COLOR);
        let mut source = cfg.scheme.source();

        let mut out = Vec::with_capacity(layout.survivors.len());
        for (&idx, &cells) in layout.survivors.iter().zip(&layout.widths) {
            let item = &items[idx];
            let value = layout.values[idx];

            let text = match &item.label {
                Some(template) => {
                    let label = format_label(template, value, percent(value, layout.total))?;
                    fit_label(&label, cells, item.align)
                }
                None => " ".repeat(cells),
            };

            let fg = item.fg.as_deref().unwrap_or(label_color);
            let bg = item.bg.as_deref().or_else(|| source.current(value));
            source.advance();

            out.push(Segment::styled(StyleKey::with_bg(fg, bg), text));
        }
        Ok(out)
    }
}

/// Share of `total`, rounded half-to-even; `None` for a zero total.
#[allow(clippy::cast_possible_truncation)]
fn percent(value: f64, total: f64) -> Option<i64> {
    let pct = (value / total * 100.0).round_ties_even();
    pct.is_finite().then_some(pct as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{data::Align, segment::plain_text};

    fn items(values: &[f64]) -> Vec<BarItem> {
        values.iter().copied().map(BarItem::from).collect()
    }

    #[test]
    fn equal_values_share_cells() {
        let cfg = BarConfig::builder(3).build().unwrap();
        let layout = SparkBar::new(&cfg).layout(&items(&[10.0, 10.0, 10.0])).unwrap();
        assert_eq!(layout.widths, vec![1, 1, 1]);
        assert_eq!(layout.survivors, vec![0, 1, 2]);
    }

    #[test]
    fn unlabelled_segments_are_blank_cells() {
        let cfg = BarConfig::builder(6).build().unwrap();
        let segs = SparkBar::new(&cfg).render(&items(&[1.0, 2.0])).unwrap();
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].text, "  ");
        assert_eq!(segs[1].text, "    ");
        // mono: label colour only
        assert_eq!(segs[0].style, Some(StyleKey::fg("light gray")));
    }

    #[test]
    fn min_width_floor_is_applied() {
        let cfg = BarConfig::builder(10).min_width(2).build().unwrap();
        let layout = SparkBar::new(&cfg)
            .layout(&items(&[1.0, 1.0, 100.0]))
            .unwrap();
        assert!(layout.widths.iter().all(|&w| w >= 2), "{:?}", layout.widths);
        assert_eq!(layout.widths.iter().sum::<usize>(), 10);
    }

    #[test]
    fn tiny_values_drop_out_without_floor() {
        let cfg = BarConfig::builder(10).build().unwrap();
        let segs = SparkBar::new(&cfg)
            .render(&[
                BarItem::new(0.5).label("tiny"),
                BarItem::new(50.0).label("big"),
            ])
            .unwrap();
        assert_eq!(segs.len(), 1);
        assert!(segs[0].text.starts_with("big"));
    }

    #[test]
    fn fit_label_keeps_tiny_values() {
        let cfg = BarConfig::builder(10).fit_label(true).build().unwrap();
        let layout = SparkBar::new(&cfg).layout(&items(&[0.5, 50.0])).unwrap();
        assert_eq!(layout.survivors, vec![0, 1]);
    }

    #[test]
    fn labels_expand_value_and_pct_of_full_total() {
        let cfg = BarConfig::builder(20).build().unwrap();
        let segs = SparkBar::new(&cfg)
            .render(&[
                BarItem::new(30.0).label("{value}:{pct}%"),
                BarItem::new(10.0).label("{pct}%").align(Align::Right),
            ])
            .unwrap();
        assert_eq!(plain_text(&segs).chars().count(), 20);
        assert!(segs[0].text.starts_with("30:75%"));
        assert_eq!(segs[1].text, " 25% ");
    }

    #[test]
    fn pct_counts_eliminated_values_in_total() {
        let cfg = BarConfig::builder(10).build().unwrap();
        let segs = SparkBar::new(&cfg)
            .render(&[
                BarItem::new(5.0).label("{pct}"),
                BarItem::new(60.0).label("{pct}"),
                BarItem::new(40.0).label("{pct}"),
            ])
            .unwrap();
        // 5 is below one cell (105 / 10) and drops out; shares stay of 105
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].text, "57    ");
        assert_eq!(segs[1].text, "38  ");
    }

    #[test]
    fn long_labels_are_truncated() {
        let cfg = BarConfig::builder(4).build().unwrap();
        let segs = SparkBar::new(&cfg)
            .render(&[BarItem::new(1.0).label("a very long label")])
            .unwrap();
        assert_eq!(segs[0].text, "a v…");
    }

    #[test]
    fn rotation_advances_even_with_explicit_background() {
        let cfg = BarConfig::builder(3)
            .scheme("rotate:red,green,blue")
            .label_color("white")
            .build()
            .unwrap();
        let segs = SparkBar::new(&cfg)
            .render(&[
                BarItem::new(1.0),
                BarItem::new(1.0).bg("black").fg("yellow"),
                BarItem::new(1.0),
            ])
            .unwrap();
        let keys: Vec<String> = segs
            .iter()
            .map(|s| s.style.as_ref().unwrap().to_string())
            .collect();
        assert_eq!(keys, ["white:red", "yellow:black", "white:blue"]);
    }

    #[test]
    fn normalize_remaps_before_charting() {
        let cfg = BarConfig::builder(10).normalize(1.0..=10.0).build().unwrap();
        let layout = SparkBar::new(&cfg)
            .layout(&items(&[0.0, 50.0, 100.0]))
            .unwrap();
        assert_eq!(layout.values, vec![1.0, 5.0, 10.0]);
        assert_eq!(layout.widths.iter().sum::<usize>(), 10);
    }

    #[test]
    fn caller_items_are_not_mutated() {
        let cfg = BarConfig::builder(10).normalize(0.0..=1.0).build().unwrap();
        let input = items(&[3.0, 9.0]);
        let before = input.clone();
        let _ = SparkBar::new(&cfg).render(&input).unwrap();
        assert_eq!(input, before);
    }

    #[test]
    fn all_items_eliminated_leaves_empty_layout() {
        let cfg = BarConfig::builder(5).build().unwrap();
        let bar = SparkBar::new(&cfg);
        let layout = bar.layout(&items(&[-1.0, -2.0])).unwrap();
        assert!(layout.survivors.is_empty());
        assert!(layout.widths.is_empty());
        assert!(bar.render(&items(&[-1.0, -2.0])).unwrap().is_empty());
    }

    #[test]
    fn empty_input_is_an_error() {
        let cfg = BarConfig::builder(5).build().unwrap();
        assert!(matches!(
            SparkBar::new(&cfg).render(&[]),
            Err(ChartError::EmptyData)
        ));
    }

    #[test]
    fn bad_template_fails_before_output() {
        let cfg = BarConfig::builder(5).build().unwrap();
        let res = SparkBar::new(&cfg).render(&[BarItem::new(1.0).label("{nope}")]);
        assert!(matches!(res, Err(ChartError::Label(_))));
    }

    #[test]
    fn zero_total_leaves_pct_blank() {
        let cfg = BarConfig::builder(4).build().unwrap();
        let segs = SparkBar::new(&cfg)
            .render(&[BarItem::new(0.0).label("{pct}x")])
            .unwrap();
        assert_eq!(segs[0].text, "x   ");
    }
}
