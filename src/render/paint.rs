//! Host-side painter: turns [`Segment`]s into ANSI-coloured text and writes
//! them to the terminal in one batched write.
//!
//! Colours that don't parse are left unpainted (logged at debug level), so
//! a chart is always printed even if the palette names something exotic.

use std::io::{self, Write, stdout};

use tracing::debug;

use crate::core::{
    color::{AnsiCode, Layer},
    segment::{Segment, StyleKey},
};

const RESET_SEQ: &str = "\x1b[0m";

#[derive(Clone, Copy, Debug)]
pub struct Painter {
    color: bool,
}

impl Painter {
    #[inline]
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    /// Text only, styles dropped.
    #[inline]
    #[must_use]
    pub const fn plain() -> Self {
        Self::new(false)
    }

    #[must_use]
    pub fn paint(&self, segments: &[Segment]) -> String {
        let mut buf = String::with_capacity(segments.iter().map(|s| s.text.len() + 24).sum());
        for seg in segments {
            let open = match (&seg.style, self.color) {
                (Some(style), true) => escape(style),
                _ => String::new(),
            };
            if open.is_empty() {
                buf.push_str(&seg.text);
            } else {
                buf.push_str(&open);
                buf.push_str(&seg.text);
                buf.push_str(RESET_SEQ);
            }
        }
        buf
    }

    /// Paint `segments` as one line on `out`.
    pub fn write_line<W: Write>(&self, out: &mut W, segments: &[Segment]) -> io::Result<()> {
        let mut line = self.paint(segments);
        line.push('\n');
        out.write_all(line.as_bytes())
    }

    /// [`Painter::write_line`] on a locked stdout.
    pub fn print(&self, segments: &[Segment]) -> io::Result<()> {
        let mut term = stdout().lock();
        self.write_line(&mut term, segments)?;
        term.flush()
    }
}

/// Opening escape(s) for `style`; empty when neither layer paints.
fn escape(style: &StyleKey) -> String {
    let layers = [
        (Some(style.fg.as_str()), Layer::Fg),
        (style.bg.as_deref(), Layer::Bg),
    ];
    let mut seq = String::new();
    for (name, layer) in layers {
        let Some(name) = name else { continue };
        match AnsiCode::from_name(name, layer) {
            Ok(Some(code)) => seq.push_str(code.as_str()),
            Ok(None) => {}
            Err(e) => debug!(colour = name, %e, "colour left unpainted"),
        }
    }
    seq
}
