mod cli;

use cli::CliCommand;
use sitemirror_core::logging;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the
    // state dir is unusable.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("sitemirror error: {:#}", err);
        std::process::exit(1);
    }
}
