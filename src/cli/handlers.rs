use std::time::Instant;

use tracing::Level;

use crate::{
    core::{
        bounds::terminal_width,
        color::{AnsiCode, Layer, colorize},
        config::{BarConfig, ColumnConfig},
        data::{BarItem, ColumnItem, open_source, read_bar_items, read_column_items},
        error::ChartError,
        scheme::{Catalog, ColorScheme, SchemeRef},
        segment::{Segment, StyleKey},
        source::Condition,
    },
    render::{Painter, SparkBar, SparkColumn},
};

use super::parse::{BarArgs, ColumnArgs};

/// Install the stderr subscriber: DEBUG with `--debug`, WARN otherwise.
pub fn init_logging(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .ok();
}

pub fn column(a: ColumnArgs, debug: bool, painter: Painter) -> Result<(), ChartError> {
    let t_ingest = Instant::now();
    let items: Vec<ColumnItem> = if a.values.is_empty() {
        read_column_items(open_source(a.file.as_deref().unwrap_or("-"))?)?
    } else {
        a.values.into_iter().map(ColumnItem::from).collect()
    };
    let dur_ingest = t_ingest.elapsed().as_micros();

    let mut b = ColumnConfig::builder()
        .scheme(a.scheme.parse::<SchemeRef>()?)
        .underline(a.underline.into())
        .overline(a.overline.into());
    if let Some(v) = a.scale_min {
        b = b.scale_min(v);
    }
    if let Some(v) = a.scale_max {
        b = b.scale_max(v);
    }
    let cfg = b.build()?;

    let t_render = Instant::now();
    let segments = SparkColumn::new(&cfg).render(&items);
    let dur_render = t_render.elapsed().as_micros();
    if debug {
        eprintln!(
            "ingest: {dur_ingest} µs   render: {dur_render} µs   ({} items)",
            items.len()
        );
    }
    painter.print(&segments)?;
    Ok(())
}

pub fn bar(a: BarArgs, debug: bool, painter: Painter) -> Result<(), ChartError> {
    let t_ingest = Instant::now();
    let mut items: Vec<BarItem> = if a.values.is_empty() {
        read_bar_items(open_source(a.file.as_deref().unwrap_or("-"))?)?
    } else {
        a.values.into_iter().map(BarItem::from).collect()
    };
    if let Some(template) = &a.label {
        for item in items.iter_mut().filter(|i| i.label.is_none()) {
            item.label = Some(template.clone());
        }
    }
    let dur_ingest = t_ingest.elapsed().as_micros();

    let width = a.width.unwrap_or_else(terminal_width);
    let mut b = BarConfig::builder(width)
        .scheme(a.scheme.parse::<SchemeRef>()?)
        .label_color_opt(a.label_color.as_deref())
        .min_width(a.min_width)
        .fit_label(a.fit_label);
    if let Some((lo, hi)) = a.normalize {
        b = b.normalize(lo..=hi);
    }
    let cfg = b.build()?;

    let t_render = Instant::now();
    let segments = SparkBar::new(&cfg).render(&items)?;
    let dur_render = t_render.elapsed().as_micros();
    if debug {
        eprintln!(
            "ingest: {dur_ingest} µs   render: {dur_render} µs   ({} items, {} shown, {width} cells)",
            items.len(),
            segments.len()
        );
    }
    painter.print(&segments)?;
    Ok(())
}

/// Built-in schemes with a colour preview, then the inline syntax.
pub fn schemes(painter: Painter) -> Result<(), ChartError> {
    let catalog = Catalog::builtin();
    let name_w = catalog.iter().map(|(n, _)| n.len()).max().unwrap_or(0);

    println!("\nBuilt-in schemes:");
    for (name, descriptor) in catalog.iter() {
        let mut line = vec![Segment::plain(format!("  {name:<name_w$}  "))];
        line.extend(preview(&ColorScheme::from_descriptor(descriptor)?));
        painter.print(&line)?;
    }

    let sample = AnsiCode::from_hex("#6048c1", Layer::Fg).map_or_else(
        |_| "#6048c1".to_owned(),
        |c| colorize(&c, "#6048c1"),
    );
    println!(
        "
Inline schemes (anything containing `:`):
  mono
  rotate:red,{sample},light blue
  rules:<0=dark red;>=10=yellow;else=default

Comparators: <  <=  >  >=  =     catch-all: else (must come last)
Colours: the 16 basic names (dark red, light gray, ...), default, #rgb, #rrggbb
"
    );
    Ok(())
}

fn preview(scheme: &ColorScheme) -> Vec<Segment> {
    match scheme {
        ColorScheme::Mono => vec![Segment::plain("(terminal default)")],
        ColorScheme::Rotate(colors) => colors
            .iter()
            .map(|c| Segment::styled(StyleKey::fg(c.as_str()), "█"))
            .collect(),
        ColorScheme::Rules(rules) => rules
            .conditions()
            .map(|(condition, color)| {
                let text = match condition {
                    Condition::Compare(op, t) => format!("{op}{t} "),
                    Condition::Else => "else ".to_owned(),
                };
                Segment::styled(StyleKey::fg(color), text)
            })
            .collect(),
    }
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "sparkcells";
    println!(
        "
Example invocations
-------------------
• Sparkline         : {bin} column 1 2 3 2 1
• Signed colouring  : {bin} column --scheme signed --underline negative -- -3 -1 0 2 5
• Min / max markers : {bin} column --underline min --overline max 4 1 7 3 9 2
• Fixed scale       : {bin} column --scale-min 0 --scale-max 100 12 48 97
• From a file       : {bin} column --file series.txt
• Stacked bar       : {bin} bar --width 40 --label \"{{value}} ({{pct}}%)\" 50 30 20
• Inline rotation   : {bin} bar --width 30 --scheme \"rotate:dark red,dark blue\" 3 2 1
• Minimum widths    : {bin} bar --width 20 --min-width 3 1 1 100
• Labelled records  : {bin} bar --file shares.csv   (VALUE,LABEL,FG,BG,ALIGN)
• Debug mode        : {bin} --debug bar 10 10 10
"
    );
}
