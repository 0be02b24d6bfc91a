use flint::{conf, control, logging};
use std::process;

/// Entry point that starts the control loop.
fn main() {
    let config = conf::load();

    if let Err(err) = logging::init(&config) {
        eprintln!("flint: {err}");
    }

    let code = match control::control_loop(&config) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("flint: {err}");
            1
        }
    };

    process::exit(code);
}
