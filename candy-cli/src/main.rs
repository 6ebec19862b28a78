//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use candy_cli::CliError;
use env_logger::Env;

#[expect(clippy::print_stderr, reason = "the binary reports fatal errors")]
fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    match candy_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("candy-rush: {err}");
            std::process::exit(1);
        }
    }
}
