use dwimgs_core::logging;
use dwimgs_core::setup::SetupError;

mod cli;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = cli::run_from_args() {
        match err.downcast_ref::<SetupError>() {
            Some(setup) => cli::output::print_setup_error(setup),
            None => eprintln!("dwimgs error: {:#}", err),
        }
        std::process::exit(1);
    }
}
