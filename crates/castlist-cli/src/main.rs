use castlist_core::logging;
use clap::Parser;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the
    // state-dir log file cannot be opened.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse and dispatch. Exit-code decisions all live here: usage errors
    // and fetch failures exit 1, help exits 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    if let Err(err) = cli::run(&cli) {
        eprintln!("castlist error: {:#}", err);
        std::process::exit(1);
    }
}
