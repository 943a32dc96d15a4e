mod config;
mod error;
mod logging;
mod paths;

use std::process::ExitCode;

use contact_form::ContactForm;

use crate::config::AppConfig;
use crate::error::AppError;

fn run(config: &AppConfig) -> Result<(), AppError> {
    if config.log_to_file {
        let path = logging::init(config.log_level)?;
        log::info!("{} starting, logging to {}", config.name, path.display());
    }

    let mut form = ContactForm::new();
    tuidom::run(&mut form)?;

    if config.echo_on_exit {
        if let Some(values) = form.last_submission() {
            println!("You Submitted:");
            for (field, value) in values.entries() {
                println!("  {}: {value}", field.summary_label());
            }
        }
    }

    log::info!("{} exiting", config.name);
    Ok(())
}

fn main() -> ExitCode {
    match run(&AppConfig::from_env(env!("CARGO_PKG_NAME"))) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
