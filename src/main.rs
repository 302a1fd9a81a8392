mod app;

use app::errors::ContextError;
use app::models::RunOutcome;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    if let Err(err) = app::signal::install_interrupt_handler() {
        log::warn!("Could not install Ctrl+C handler: {:#}", err);
    }

    match app::run() {
        Ok(RunOutcome::Dumped(report)) => {
            log::debug!("{} of {} files written", report.written, report.listed);
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::NothingToDo) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            if let Some(hint) = err.downcast_ref::<ContextError>().and_then(|e| e.remedy()) {
                eprintln!("{}", hint);
            }
            ExitCode::FAILURE
        }
    }
}
