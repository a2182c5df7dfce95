//! Generates a font covering every Unicode Braille pattern.

use braille_font::core;

fn main() {
    let cli_args = core::platform::get_cli_args();
    let _log_guard = core::platform::init_logging(&cli_args);
    if let Err(error) = core::run_app(cli_args) {
        core::platform::handle_error(error);
    }
}
