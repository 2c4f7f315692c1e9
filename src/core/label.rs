//! Bar label templates and fitting labels into a fixed number of cells.
//!
//! Templates substitute `{value}` and `{pct}`; either may carry a precision
//! (`{value:.1}`).  `{{` and `}}` produce literal braces.

use std::{error::Error, fmt, fmt::Write as _};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::{constants::ELLIPSIS, data::Align};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    UnknownField(String),
    UnbalancedBrace(String),
    BadPrecision(String),
}

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelError::UnknownField(name) => {
                write!(f, "unknown label field `{{{name}}}` (use {{value}} or {{pct}})")
            }
            LabelError::UnbalancedBrace(t) => write!(f, "unbalanced brace in label `{t}`"),
            LabelError::BadPrecision(spec) => write!(f, "bad label precision `{spec}`"),
        }
    }
}
impl Error for LabelError {}

/// Integral values print without a fractional part.
#[must_use]
pub fn format_number(v: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{v:.p$}"),
        #[allow(clippy::cast_possible_truncation)]
        None if v.fract() == 0.0 && v.abs() < 1e15 => format!("{}", v as i64),
        None => format!("{v}"),
    }
}

fn parse_precision(spec: &str) -> Result<Option<usize>, LabelError> {
    if spec.is_empty() {
        return Ok(None);
    }
    spec.strip_prefix('.')
        .and_then(|digits| digits.parse().ok())
        .map(Some)
        .ok_or_else(|| LabelError::BadPrecision(spec.to_owned()))
}

/// Expand `template` for one item. `pct` is `None` when the chart total is 0,
/// which renders as an empty string.
pub fn format_label(template: &str, value: f64, pct: Option<i64>) -> Result<String, LabelError> {
    let unbalanced = || LabelError::UnbalancedBrace(template.to_owned());
    let mut out = String::with_capacity(template.len() + 8);
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '}' => return Err(unbalanced()),
            '{' => {
                let mut field = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some('{') | None => return Err(unbalanced()),
                        Some(ch) => field.push(ch),
                    }
                }
                let (name, spec) = field.split_once(':').unwrap_or((field.as_str(), ""));
                let precision = parse_precision(spec)?;
                match name.trim() {
                    "value" => out.push_str(&format_number(value, precision)),
                    "pct" => {
                        if let Some(p) = pct {
                            match precision {
                                #[allow(clippy::cast_precision_loss)]
                                Some(n) => {
                                    let _ = write!(out, "{:.n$}", p as f64);
                                }
                                None => {
                                    let _ = write!(out, "{p}");
                                }
                            }
                        }
                    }
                    other => return Err(LabelError::UnknownField(other.to_owned())),
                }
            }
            _ => out.push(c),
        }
    }
    Ok(out)
}

/// Fit `text` into exactly `cells` terminal cells.
///
/// * wider than `cells`: first `cells - 1` cells plus `…`
/// * exactly `cells` wide: unchanged
/// * narrower: aligned inside `cells - 1` cells, then one blank
///
/// Empty text or zero cells yields `cells` blanks.
#[must_use]
pub fn fit_label(text: &str, cells: usize, align: Align) -> String {
    let width = text.width();
    if text.is_empty() || cells == 0 {
        return " ".repeat(cells);
    }
    if width == cells {
        return text.to_owned();
    }

    let inner = cells - 1;
    let mut out = String::with_capacity(cells + text.len());
    if width > cells {
        let mut used = 0;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > inner {
                break;
            }
            used += w;
            out.push(ch);
        }
        pad_to(&mut out, inner - used);
        out.push(ELLIPSIS);
        return out;
    }

    let gap = inner - width;
    let (left, right) = match align {
        Align::Left => (0, gap),
        Align::Right => (gap, 0),
        Align::Center => (gap / 2, gap - gap / 2),
    };
    pad_to(&mut out, left);
    out.push_str(text);
    pad_to(&mut out, right + 1);
    out
}

#[inline]
fn pad_to(buf: &mut String, n: usize) {
    buf.extend(std::iter::repeat_n(' ', n));
}
