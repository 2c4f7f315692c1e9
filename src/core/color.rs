//! Zero-alloc ANSI colour escapes for painting segments on a terminal.
//!
//! Understands the 16 basic colour names (`dark red`, `light gray`, ...),
//! `default` (no escape at all) and `#rgb` / `#rrggbb` hex.

use std::{error::Error, fmt, str};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    InvalidHexDigit,
    InvalidHexLength,
    UnknownName(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidHexDigit => f.write_str("invalid hex colour digit"),
            ColorError::InvalidHexLength => f.write_str("hex colour must be 3 or 6 digits"),
            ColorError::UnknownName(name) => write!(f, "unknown colour `{name}`"),
        }
    }
}
impl Error for ColorError {}

/// Foreground or background.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Fg,
    Bg,
}

impl Layer {
    #[inline]
    const fn offset(self) -> u8 {
        match self {
            Self::Fg => 0,
            Self::Bg => 10,
        }
    }

    #[inline]
    const fn truecolor_prefix(self) -> &'static [u8] {
        match self {
            Self::Fg => b"\x1b[38;2;",
            Self::Bg => b"\x1b[48;2;",
        }
    }
}

/// Basic colour names and their foreground SGR codes.
const BASIC_COLORS: [(&str, u8); 16] = [
    ("black", 30),
    ("dark red", 31),
    ("dark green", 32),
    ("brown", 33),
    ("dark blue", 34),
    ("dark magenta", 35),
    ("dark cyan", 36),
    ("light gray", 37),
    ("dark gray", 90),
    ("light red", 91),
    ("light green", 92),
    ("yellow", 93),
    ("light blue", 94),
    ("light magenta", 95),
    ("light cyan", 96),
    ("white", 97),
];

// --- AnsiCode ---
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnsiCode {
    Static(&'static str),
    Inline { buf: [u8; 20], len: u8 },
}

impl AnsiCode {
    #[inline]
    #[must_use]
    pub const fn reset() -> Self {
        Self::Static("\x1b[0m")
    }

    /// `ESC[<code>m`.
    fn sgr(code: u8) -> Self {
        let mut buf = [0u8; 20];
        buf[..2].copy_from_slice(b"\x1b[");
        let mut len = 2;
        len += write_u8(&mut buf[len..], code);
        buf[len] = b'm';
        len += 1;
        #[allow(clippy::cast_possible_truncation)]
        Self::Inline {
            buf,
            len: len as u8,
        }
    }

    /// True-colour escape `ESC[38;2;R;G;Bm` (or `48` for backgrounds).
    #[must_use]
    pub fn rgb(layer: Layer, r: u8, g: u8, b: u8) -> Self {
        let prefix = layer.truecolor_prefix();
        let mut buf = [0u8; 20];
        buf[..prefix.len()].copy_from_slice(prefix);
        let mut len = prefix.len();

        for (i, v) in [r, g, b].into_iter().enumerate() {
            len += write_u8(&mut buf[len..], v);
            if i != 2 {
                buf[len] = b';';
                len += 1;
            }
        }
        buf[len] = b'm';
        len += 1;
        #[allow(clippy::cast_possible_truncation)]
        Self::Inline {
            buf,
            len: len as u8,
        }
    }

    /// Parse a colour name or hex code.  `default` means "leave the
    /// terminal's colour alone" and yields `None`.
    pub fn from_name(s: &str, layer: Layer) -> Result<Option<Self>, ColorError> {
        let name = s.trim().to_ascii_lowercase();
        if name.is_empty() || name == "default" {
            return Ok(None);
        }
        if name.starts_with('#') {
            return Self::from_hex(&name, layer).map(Some);
        }
        BASIC_COLORS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, code)| Some(Self::sgr(code + layer.offset())))
            .ok_or(ColorError::UnknownName(name))
    }

    /// `#rgb` (each digit doubled) or `#rrggbb`.
    pub fn from_hex(hex: &str, layer: Layer) -> Result<Self, ColorError> {
        let h = hex.trim_start_matches('#');
        if !h.is_ascii() {
            return Err(ColorError::InvalidHexDigit);
        }
        let digit = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit);
        match h.len() {
            3 => {
                let short = |i: usize| digit(&h[i..=i]).map(|d| d * 17);
                Ok(Self::rgb(layer, short(0)?, short(1)?, short(2)?))
            }
            6 => Ok(Self::rgb(
                layer,
                digit(&h[..2])?,
                digit(&h[2..4])?,
                digit(&h[4..])?,
            )),
            _ => Err(ColorError::InvalidHexLength),
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Inline { buf, len } => str::from_utf8(&buf[..*len as usize]).unwrap_or_default(),
        }
    }
}

// --- Helpers ---
fn write_u8(dst: &mut [u8], mut n: u8) -> usize {
    let mut tmp = [0u8; 3];
    let mut i = 3;
    loop {
        i -= 1;
        tmp[i] = b'0' + n % 10;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    let len = 3 - i;
    dst[..len].copy_from_slice(&tmp[i..]);
    len
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wrap `text` in colour + reset sequence.
#[inline]
#[must_use]
pub fn colorize(c: &AnsiCode, text: &str) -> String {
    format!("{c}{text}{}", AnsiCode::reset())
}
