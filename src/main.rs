mod cli;
mod config;
mod pools;
mod utils;

use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let err_exit = ExitCode::from(1);
    let ok_exit = ExitCode::from(0);

    match cli::cli() {
        cli::CliRes::Ok => ok_exit,
        cli::CliRes::NoCli | cli::CliRes::Err => err_exit,
    }
}
