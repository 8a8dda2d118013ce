//! Interruption handler.

use jssp_core::prelude::*;
use std::process;

/// Installs Ctrl+C handler: the first signal cancels the run after the current generation,
/// the second one terminates the process.
pub fn create_interruption_handler(control: RunControl) -> GenericResult<()> {
    ctrlc::set_handler(move || {
        if control.is_cancelled() {
            process::exit(130);
        }

        control.cancel();
    })
    .map_err(|err| format!("cannot set interruption handler: '{err}'").into())
}
