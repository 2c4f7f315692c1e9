//! Vertical sparkline: one block glyph per value.

use tracing::debug;

use crate::core::{
    bounds::{normalize, series_bounds},
    config::{ColumnConfig, Overline, Underline},
    constants::{BLOCK_VERTICAL, MAX_MARK, MIN_MARK, NEGATIVE_MARK},
    data::ColumnItem,
    segment::{Segment, StyleKey},
};

const TOP: usize = BLOCK_VERTICAL.len() - 1;

/// Renders [`ColumnItem`]s with a fixed [`ColumnConfig`].
#[derive(Debug, Clone, Copy)]
pub struct SparkColumn<'a> {
    config: &'a ColumnConfig,
}

impl<'a> SparkColumn<'a> {
    #[must_use]
    pub fn new(config: &'a ColumnConfig) -> Self {
        Self { config }
    }

    /// One segment per item, in input order.  Items carrying their own style
    /// keep it and do not consume a scheme colour.
    #[must_use]
    pub fn render(&self, items: &[ColumnItem]) -> Vec<Segment> {
        let (v_min, v_max) =
            series_bounds(items.iter().map(ColumnItem::value)).unwrap_or((0.0, 0.0));
        let scale_min = self.config.scale_min.unwrap_or(v_min);
        let scale_max = self.config.scale_max.unwrap_or(v_max);
        debug!(items = items.len(), v_min, v_max, scale_min, scale_max, "column bounds");

        let mut source = self.config.scheme.source();
        items
            .iter()
            .map(|item| {
                let value = item.value();
                let color = match item.style() {
                    Some(style) => Some(style),
                    None => source.take(value),
                };
                let text = self.glyph(value, v_min, v_max, scale_min, scale_max);
                Segment {
                    style: color.map(StyleKey::fg),
                    text,
                }
            })
            .collect()
    }

    #[allow(clippy::float_cmp)]
    fn glyph(&self, value: f64, v_min: f64, v_max: f64, scale_min: f64, scale_max: f64) -> String {
        if self.config.underline == Underline::Negative && value < 0.0 {
            return NEGATIVE_MARK.to_owned();
        }

        let mut glyph = String::with_capacity(8);
        glyph.push(BLOCK_VERTICAL[ramp_index(value, scale_min, scale_max)]);
        if self.config.underline == Underline::Min && value == v_min {
            glyph.push(MIN_MARK);
        }
        if self.config.overline == Overline::Max && value == v_max {
            glyph.push(MAX_MARK);
        }
        glyph
    }
}

/// Ramp position rounded half-to-even, bounded to the ramp even on a flat scale.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn ramp_index(value: f64, scale_min: f64, scale_max: f64) -> usize {
    let idx = normalize(value, 0.0, TOP as f64, scale_min, scale_max).round_ties_even();
    if idx.is_finite() {
        idx.clamp(0.0, TOP as f64) as usize
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::segment::plain_text;

    fn render(cfg: &ColumnConfig, values: &[f64]) -> Vec<Segment> {
        let items: Vec<ColumnItem> = values.iter().copied().map(ColumnItem::from).collect();
        SparkColumn::new(cfg).render(&items)
    }

    fn level(seg: &Segment) -> usize {
        let c = seg.text.chars().next().unwrap();
        BLOCK_VERTICAL.iter().position(|&g| g == c).unwrap()
    }

    #[test]
    fn glyphs_follow_value_shape() {
        let cfg = ColumnConfig::default();
        let segs = render(&cfg, &[1.0, 2.0, 3.0, 2.0, 1.0]);
        assert_eq!(segs.len(), 5);
        let levels: Vec<usize> = segs.iter().map(level).collect();
        assert!(levels[0] < levels[1] && levels[1] < levels[2]);
        assert_eq!(levels[0], levels[4]);
        assert_eq!(levels[1], levels[3]);
        assert_eq!(plain_text(&segs), "▁▅█▅▁");
        assert!(segs.iter().all(|s| s.style.is_none()));
    }

    #[test]
    fn explicit_scale_compresses_range() {
        let cfg = ColumnConfig::builder().scale(0.0..=14.0).build().unwrap();
        assert_eq!(plain_text(&render(&cfg, &[0.0, 7.0, 14.0, 20.0])), "▁▅██");
    }

    #[test]
    fn half_steps_round_to_even_level() {
        let cfg = ColumnConfig::default();
        // 5 of 0..=14 sits at 2.5 on the ramp
        assert_eq!(plain_text(&render(&cfg, &[0.0, 5.0, 14.0])), "▁▃█");
        assert_eq!(plain_text(&render(&cfg, &[2.5, 2.5])), "▃▃");
        assert_eq!(plain_text(&render(&cfg, &[3.5])), "▅");
    }

    #[test]
    fn flat_series_stays_inside_ramp() {
        let cfg = ColumnConfig::default();
        assert_eq!(plain_text(&render(&cfg, &[100.0, 100.0])), "██");
        assert_eq!(plain_text(&render(&cfg, &[2.0])), "▃");
    }

    #[test]
    fn rotating_scheme_skips_explicitly_styled_items() {
        let cfg = ColumnConfig::builder()
            .scheme("rotate:red,green")
            .build()
            .unwrap();
        let items = vec![
            ColumnItem::from(1.0),
            ColumnItem::from(("blue", 2.0)),
            ColumnItem::from(3.0),
            ColumnItem::from(4.0),
        ];
        let fgs: Vec<String> = SparkColumn::new(&cfg)
            .render(&items)
            .into_iter()
            .map(|s| s.style.unwrap().fg)
            .collect();
        assert_eq!(fgs, ["red", "blue", "green", "red"]);
    }

    #[test]
    fn signed_scheme_colours_by_value() {
        let cfg = ColumnConfig::builder().scheme("signed").build().unwrap();
        let segs = render(&cfg, &[-1.0, 0.0, 2.0]);
        let fgs: Vec<&str> = segs
            .iter()
            .map(|s| s.style.as_ref().unwrap().fg.as_str())
            .collect();
        assert_eq!(fgs, ["dark red", "default", "default"]);
    }

    #[test]
    fn negative_underline_replaces_glyph() {
        let cfg = ColumnConfig::builder()
            .underline(Underline::Negative)
            .build()
            .unwrap();
        let segs = render(&cfg, &[-2.0, 1.0, 3.0]);
        assert_eq!(segs[0].text, NEGATIVE_MARK);
        assert_eq!(segs[2].text, "█");
    }

    #[test]
    fn min_and_max_markers_are_appended() {
        let cfg = ColumnConfig::builder()
            .underline(Underline::Min)
            .overline(Overline::Max)
            .build()
            .unwrap();
        let segs = render(&cfg, &[1.0, 5.0, 1.0, 9.0]);
        assert_eq!(segs[0].text, format!("▁{MIN_MARK}"));
        assert_eq!(segs[2].text, format!("▁{MIN_MARK}"));
        assert_eq!(segs[3].text, format!("█{MAX_MARK}"));
        assert_eq!(segs[1].text.chars().count(), 1);
    }

    #[test]
    fn empty_series_renders_nothing() {
        assert!(render(&ColumnConfig::default(), &[]).is_empty());
    }
}
