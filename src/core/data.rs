//! Chart items plus a line-oriented text reader with zero-allocation float
//! parsing.
//!
//! ### Record format
//! One item per line, comma separated, `#` starts a comment line.
//! * column: `VALUE` or `STYLE,VALUE`
//! * bar:    `VALUE[,LABEL[,FG[,BG[,ALIGN]]]]` (empty fields are unset)

use std::{
    error::Error,
    fmt::{self, Display},
    io::{BufRead, BufReader, Read},
};

// --- Items ---

/// One value of a column chart, optionally carrying its own style.
#[derive(Clone, Debug, PartialEq)]
pub enum ColumnItem {
    Value(f64),
    Styled { style: String, value: f64 },
}

impl ColumnItem {
    #[inline]
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Self::Value(v) | Self::Styled { value: v, .. } => *v,
        }
    }

    #[inline]
    #[must_use]
    pub fn style(&self) -> Option<&str> {
        match self {
            Self::Value(_) => None,
            Self::Styled { style, .. } => Some(style),
        }
    }
}

impl From<f64> for ColumnItem {
    fn from(v: f64) -> Self {
        Self::Value(v)
    }
}

impl<S: Into<String>> From<(S, f64)> for ColumnItem {
    fn from((style, value): (S, f64)) -> Self {
        Self::Styled {
            style: style.into(),
            value,
        }
    }
}

/// Label placement inside a bar segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Right,
    Center,
}

impl Align {
    /// Accepts `<`/`left`, `>`/`right`, `^`/`center`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "<" | "left" => Some(Self::Left),
            ">" | "right" => Some(Self::Right),
            "^" | "center" | "centre" => Some(Self::Center),
            _ => None,
        }
    }
}

/// One segment of a stacked bar.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BarItem {
    pub value: f64,
    /// Template; see [`crate::core::label`].
    pub label: Option<String>,
    pub fg: Option<String>,
    pub bg: Option<String>,
    pub align: Align,
}

impl BarItem {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn label(mut self, template: impl Into<String>) -> Self {
        self.label = Some(template.into());
        self
    }

    #[must_use]
    pub fn fg(mut self, color: impl Into<String>) -> Self {
        self.fg = Some(color.into());
        self
    }

    #[must_use]
    pub fn bg(mut self, color: impl Into<String>) -> Self {
        self.bg = Some(color.into());
        self
    }

    #[must_use]
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

impl From<f64> for BarItem {
    fn from(v: f64) -> Self {
        Self::new(v)
    }
}

// --- Error Handling ---
#[derive(Debug)]
pub struct ParseValueError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug)]
pub enum ParseErrorKind {
    Io(std::io::Error),
    BadFieldCount { got: usize, max: usize },
    BadFloat { field: &'static str, text: String },
    BadAlign(String),
}

impl Display for ParseValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Io(e) => write!(f, "I/O error on line {}: {}", self.line, e),
            ParseErrorKind::BadFieldCount { got, max } => {
                write!(f, "line {}: expected 1–{max} fields, got {got}", self.line)
            }
            ParseErrorKind::BadFloat { field, text } => {
                write!(f, "line {}: invalid {} value '{}'", self.line, field, text)
            }
            ParseErrorKind::BadAlign(text) => {
                write!(f, "line {}: unknown alignment '{}'", self.line, text)
            }
        }
    }
}

impl Error for ParseValueError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ParseErrorKind::Io(e) => Some(e),
            _ => None,
        }
    }
}

// --- Helpers ---
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

/// Parse one finite float; `field` names it in the error.
pub fn parse_value(text: &str, line: usize, field: &'static str) -> Result<f64, ParseValueError> {
    let bad = || ParseValueError {
        line,
        kind: ParseErrorKind::BadFloat {
            field,
            text: text.to_owned(),
        },
    };
    let val = lexical_core::parse::<f64>(text.trim().as_bytes()).map_err(|_| bad())?;
    if val.is_finite() { Ok(val) } else { Err(bad()) }
}

// --- Line ingest ---
const BUF_CAP: usize = 1 << 16;

/// Walk non-empty, non-comment lines as `(line_no, fields)`.
fn read_records<R, F>(src: R, max_fields: usize, mut each: F) -> Result<(), ParseValueError>
where
    R: Read,
    F: FnMut(usize, &[&str]) -> Result<(), ParseValueError>,
{
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseValueError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }
        normalize_unicode_minus(&mut buf);

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() > max_fields {
            return Err(ParseValueError {
                line: line_no,
                kind: ParseErrorKind::BadFieldCount {
                    got: fields.len(),
                    max: max_fields,
                },
            });
        }
        each(line_no, &fields)?;
    }
    Ok(())
}

pub fn read_column_items<R: Read>(src: R) -> Result<Vec<ColumnItem>, ParseValueError> {
    let mut items = Vec::new();
    read_records(src, 2, |line, fields| {
        items.push(if let [style, value] = fields {
            ColumnItem::Styled {
                style: (*style).to_owned(),
                value: parse_value(value, line, "value")?,
            }
        } else {
            ColumnItem::Value(parse_value(fields[0], line, "value")?)
        });
        Ok(())
    })?;
    Ok(items)
}

pub fn read_bar_items<R: Read>(src: R) -> Result<Vec<BarItem>, ParseValueError> {
    let opt = |s: Option<&&str>| s.filter(|s| !s.is_empty()).map(|s| (*s).to_owned());
    let mut items = Vec::new();
    read_records(src, 5, |line, fields| {
        let mut item = BarItem::new(parse_value(fields[0], line, "value")?);
        item.label = opt(fields.get(1));
        item.fg = opt(fields.get(2));
        item.bg = opt(fields.get(3));
        if let Some(a) = opt(fields.get(4)) {
            item.align = Align::parse(&a).ok_or(ParseValueError {
                line,
                kind: ParseErrorKind::BadAlign(a),
            })?;
        }
        items.push(item);
        Ok(())
    })?;
    Ok(items)
}

/// Open `path` (`-` is stdin).
pub fn open_source(path: &str) -> Result<Box<dyn Read>, ParseValueError> {
    if path == "-" {
        Ok(Box::new(std::io::stdin()))
    } else {
        use std::fs::File;
        Ok(Box::new(File::open(path).map_err(|e| ParseValueError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_records_with_and_without_style() {
        let src = "# series\n1\n\ndark red, −2.5\r\n3\n";
        let items = read_column_items(src.as_bytes()).unwrap();
        assert_eq!(
            items,
            vec![
                ColumnItem::Value(1.0),
                ColumnItem::from(("dark red", -2.5)),
                ColumnItem::Value(3.0),
            ]
        );
        assert_eq!(items[1].style(), Some("dark red"));
        assert!((items[1].value() + 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn bar_records_fill_optional_fields() {
        let src = "10,cpu {pct}%,white,,>\n5\n";
        let items = read_bar_items(src.as_bytes()).unwrap();
        assert_eq!(
            items[0],
            BarItem::new(10.0)
                .label("cpu {pct}%")
                .fg("white")
                .align(Align::Right)
        );
        assert_eq!(items[1], BarItem::new(5.0));
    }

    #[test]
    fn errors_carry_line_numbers() {
        let err = read_column_items("1\nabc\n".as_bytes()).unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(err.kind, ParseErrorKind::BadFloat { .. }));

        let err = read_column_items("1,2,3\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err.kind,
            ParseErrorKind::BadFieldCount { got: 3, max: 2 }
        ));

        let err = read_bar_items("1,a,,,sideways\n".as_bytes()).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::BadAlign(_)));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(parse_value("inf", 1, "value").is_err());
        assert!(parse_value("NaN", 1, "value").is_err());
    }

    #[test]
    fn align_aliases() {
        assert_eq!(Align::parse("^"), Some(Align::Center));
        assert_eq!(Align::parse("RIGHT"), Some(Align::Right));
        assert_eq!(Align::parse("up"), None);
    }
}
