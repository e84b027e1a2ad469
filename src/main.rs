use std::process::ExitCode;

fn main() -> ExitCode {
    match sehat::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Failed to start: {e}");
            eprintln!("sehat: {e}");
            ExitCode::FAILURE
        }
    }
}
