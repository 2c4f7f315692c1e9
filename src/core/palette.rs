//! Fixed colour lists backing the built-in rotating schemes.

/// Basic terminal colours, minus black.
pub const DISTINCT_COLORS_16: [&str; 15] = [
    "dark red",
    "dark green",
    "brown",
    "dark blue",
    "dark magenta",
    "dark cyan",
    "light gray",
    "dark gray",
    "light red",
    "light green",
    "yellow",
    "light blue",
    "light magenta",
    "light cyan",
    "white",
];

/// 12-bit hex colours picked to stay distinguishable next to each other.
pub const DISTINCT_COLORS_256: [&str; 28] = [
    "#f00", "#080", "#00f", "#d6f", "#0ad", "#f80", "#8f0", "#666", //
    "#f88", "#808", "#0fd", "#66f", "#aa8", "#060", "#faf", "#860", //
    "#60a", "#600", "#ff8", "#086", "#8a6", "#adf", "#88a", "#f60", //
    "#068", "#a66", "#f0a", "#fda",
];

/// Same idea as [`DISTINCT_COLORS_256`] at 24-bit precision.
pub const DISTINCT_COLORS_TRUE: [&str; 28] = [
    "#ff0000", "#008c00", "#0000ff", "#c34fff", //
    "#01a5ca", "#ec9d00", "#76ff00", "#595354", //
    "#ff7598", "#940073", "#00f3cc", "#4853ff", //
    "#a6a19a", "#004301", "#edb7ff", "#8a6800", //
    "#6100a3", "#5c0011", "#fff585", "#007b69", //
    "#92b853", "#abd4ff", "#7e79a3", "#ff5401", //
    "#0a577d", "#a8615c", "#e700b9", "#ffc3a6",
];

/// Colour keys of the built-in `signed` scheme.
pub const SIGNED_NEGATIVE: &str = "dark red";
pub const SIGNED_NONNEGATIVE: &str = "default";
