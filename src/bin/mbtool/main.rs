use std::process::ExitCode;

mod cli;
mod commands;
mod logger;

fn main() -> ExitCode {
    let cli = cli::parse();

    if let Err(e) = logger::init(cli.verbose) {
        eprintln!("warning: failed to install logger: {e}");
    }

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
