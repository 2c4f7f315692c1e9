use std::process::ExitCode;

fn main() -> ExitCode {
    match sparkcells::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("sparkcells: {e}");
            ExitCode::FAILURE
        }
    }
}
