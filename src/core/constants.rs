//! A collection of constants.

/// Eight-level vertical block ramp, lowest first (▁▂▃▄▅▆▇█).
pub const BLOCK_VERTICAL: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Drawn in place of a ramp glyph for negative values when underlining negatives.
pub const NEGATIVE_MARK: &str = " \u{0323}";
/// Combining triple underdot, appended to the series minimum.
pub const MIN_MARK: char = '\u{20E8}';
/// Combining three dots above, appended to the series maximum.
pub const MAX_MARK: char = '\u{20DB}';

/// Last cell of a label that did not fit.
pub const ELLIPSIS: char = '…';

/// Label foreground when neither the item nor the config names one.
pub const DEFAULT_LABEL_COLOR: &str = "light gray";

/// Used when the terminal size can't be queried.
pub const FALLBACK_TERMINAL_WIDTH: usize = 80;
