mod cli;
mod commands;

use scholarship_scoring::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
