//! The renderers' sole output unit: a run of text plus an optional style.

use std::fmt;

/// Reference to a host palette entry, displayed `fg` or `fg:bg`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StyleKey {
    pub fg: String,
    pub bg: Option<String>,
}

impl StyleKey {
    pub fn fg(color: impl Into<String>) -> Self {
        Self {
            fg: color.into(),
            bg: None,
        }
    }

    pub fn with_bg(fg: impl Into<String>, bg: Option<impl Into<String>>) -> Self {
        Self {
            fg: fg.into(),
            bg: bg.map(Into::into),
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.bg {
            Some(bg) => write!(f, "{}:{bg}", self.fg),
            None => f.write_str(&self.fg),
        }
    }
}

/// `(style-or-none, text)`, concatenation ready.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub style: Option<StyleKey>,
    pub text: String,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            style: None,
            text: text.into(),
        }
    }

    pub fn styled(style: StyleKey, text: impl Into<String>) -> Self {
        Self {
            style: Some(style),
            text: text.into(),
        }
    }
}

/// Concatenate the text of `segments`, dropping styles.
#[must_use]
pub fn plain_text(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_key_names_palette_entry() {
        assert_eq!(StyleKey::fg("white").to_string(), "white");
        assert_eq!(
            StyleKey::with_bg("light gray", Some("#f00")).to_string(),
            "light gray:#f00"
        );
    }

    #[test]
    fn plain_text_joins_in_order() {
        let segs = [
            Segment::plain("a"),
            Segment::styled(StyleKey::fg("red"), "b"),
        ];
        assert_eq!(plain_text(&segs), "ab");
    }
}
