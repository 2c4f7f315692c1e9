use clap::{Parser, Subcommand, ValueEnum};

use crate::core::config::{Overline, Underline};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "sparkcells",
    about = "Sparkline columns and stacked bars in a handful of terminal cells"
)]
pub struct Cli {
    /// Emit debug logging and timing diagnostics on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Print plain text without colour escapes
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// One block glyph per value
    Column(ColumnArgs),
    /// Values sharing a fixed number of cells, optionally labelled
    Bar(BarArgs),
    /// List the built-in colour schemes and the inline scheme syntax
    Schemes,
    /// Print example invocations
    Examples,
}

/// `sparkcells column …`
#[derive(Parser, Debug)]
pub struct ColumnArgs {
    /// Values to chart; read from FILE (or stdin) when none are given
    #[arg(value_name = "VALUE", allow_negative_numbers = true, conflicts_with = "file")]
    pub values: Vec<f64>,

    /// Input file, one `VALUE` or `STYLE,VALUE` per line (`-` for stdin)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<String>,

    /// Built-in scheme name or inline descriptor (`rotate:red,blue`)
    #[arg(short, long, default_value = "mono")]
    pub scheme: String,

    /// Lower end of the glyph scale (series minimum if omitted)
    #[arg(long, allow_negative_numbers = true)]
    pub scale_min: Option<f64>,
    /// Upper end of the glyph scale (series maximum if omitted)
    #[arg(long, allow_negative_numbers = true)]
    pub scale_max: Option<f64>,

    #[arg(long, value_enum, default_value_t = UnderlineArg::None)]
    pub underline: UnderlineArg,

    #[arg(long, value_enum, default_value_t = OverlineArg::None)]
    pub overline: OverlineArg,
}

/// `sparkcells bar …`
#[derive(Parser, Debug)]
pub struct BarArgs {
    /// Values to chart; read from FILE (or stdin) when none are given
    #[arg(value_name = "VALUE", allow_negative_numbers = true, conflicts_with = "file")]
    pub values: Vec<f64>,

    /// Input file, one `VALUE[,LABEL[,FG[,BG[,ALIGN]]]]` per line (`-` for stdin)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<String>,

    /// Cells to fill (terminal width if omitted)
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Built-in scheme name or inline descriptor
    #[arg(short, long, default_value = "rotate_16")]
    pub scheme: String,

    /// Label template for items without one, e.g. `{value} ({pct}%)`
    #[arg(short, long)]
    pub label: Option<String>,

    /// Foreground colour for labels
    #[arg(long)]
    pub label_color: Option<String>,

    /// Minimum cells per segment (0 = none)
    #[arg(long, default_value_t = 0)]
    pub min_width: usize,

    /// Keep values too small to earn a cell
    #[arg(long)]
    pub fit_label: bool,

    /// Remap values into `LO,HI` before charting
    #[arg(long, value_name = "LO,HI", value_parser = parse_range, allow_hyphen_values = true)]
    pub normalize: Option<(f64, f64)>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum UnderlineArg {
    None,
    Negative,
    Min,
}

impl From<UnderlineArg> for Underline {
    fn from(u: UnderlineArg) -> Self {
        match u {
            UnderlineArg::None => Underline::None,
            UnderlineArg::Negative => Underline::Negative,
            UnderlineArg::Min => Underline::Min,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OverlineArg {
    None,
    Max,
}

impl From<OverlineArg> for Overline {
    fn from(o: OverlineArg) -> Self {
        match o {
            OverlineArg::None => Overline::None,
            OverlineArg::Max => Overline::Max,
        }
    }
}

fn parse_range(s: &str) -> Result<(f64, f64), String> {
    let (lo, hi) = s
        .split_once(',')
        .ok_or_else(|| format!("expected LO,HI, got `{s}`"))?;
    let num = |t: &str| {
        lexical_core::parse::<f64>(t.trim().as_bytes()).map_err(|_| format!("bad number `{t}`"))
    };
    Ok((num(lo)?, num(hi)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_flags_parse() {
        let cli = Cli::try_parse_from([
            "sparkcells",
            "--no-color",
            "bar",
            "3",
            "1",
            "--width",
            "12",
            "--normalize",
            "-1,1",
            "--min-width",
            "2",
        ])
        .unwrap();
        assert!(cli.no_color);
        let Command::Bar(a) = cli.cmd else {
            panic!("expected bar")
        };
        assert_eq!(a.values, vec![3.0, 1.0]);
        assert_eq!(a.width, Some(12));
        assert_eq!(a.normalize, Some((-1.0, 1.0)));
        assert_eq!(a.min_width, 2);
    }

    #[test]
    fn column_accepts_negative_values_and_markers() {
        let cli = Cli::try_parse_from([
            "sparkcells",
            "column",
            "-2",
            "5",
            "--underline",
            "negative",
            "--overline",
            "max",
        ])
        .unwrap();
        let Command::Column(a) = cli.cmd else {
            panic!("expected column")
        };
        assert_eq!(a.values, vec![-2.0, 5.0]);
        assert_eq!(Underline::from(a.underline), Underline::Negative);
        assert_eq!(Overline::from(a.overline), Overline::Max);
    }

    #[test]
    fn range_needs_two_numbers() {
        assert_eq!(parse_range("0, 10"), Ok((0.0, 10.0)));
        assert!(parse_range("10").is_err());
        assert!(parse_range("a,b").is_err());
    }
}
