mod cli;
mod infra;
mod report;
mod routes;
mod server;

use gtm_directory::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
