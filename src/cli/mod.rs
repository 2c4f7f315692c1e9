mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::{core::error::ChartError, render::Painter};

pub fn run() -> Result<(), ChartError> {
    let cli = parse::Cli::parse();
    handlers::init_logging(cli.debug);
    let painter = Painter::new(!cli.no_color && std::env::var_os("NO_COLOR").is_none());

    match cli.cmd {
        parse::Command::Column(a) => handlers::column(a, cli.debug, painter),
        parse::Command::Bar(a) => handlers::bar(a, cli.debug, painter),
        parse::Command::Schemes => handlers::schemes(painter),
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
