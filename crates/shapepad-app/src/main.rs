//! Main application entry point.

use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting Shapepad");

    let config = shapepad_app::AppConfig::load();
    match shapepad_app::App::run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Shapepad exited with an error: {e}");
            ExitCode::FAILURE
        }
    }
}
