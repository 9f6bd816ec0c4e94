//! Epoch explorer executable entry.
use std::process;

fn main() {
    let version = env!("CARGO_PKG_VERSION");
    if let Err(exit_code) = explorer_bin::run_app(version) {
        process::exit(exit_code.code());
    }
}
