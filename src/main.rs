use argrt::status::ExitStatus;
use argrt::{core, logging};

/// Entry point - sets up logging and calls core::run()
///
/// Returns ExitStatus directly, which implements std::process::Termination.
fn main() -> ExitStatus {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    core::run(args)
}
