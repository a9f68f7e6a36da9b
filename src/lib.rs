//! CycleStrong adjustment service: a small HTTP API that turns a lifter's
//! cycle phase, energy, recent performance, and perceived difficulty into a
//! deterministic, explainable training adjustment.

pub mod config;
pub mod error;
pub mod routes;
pub mod rules;
pub mod telemetry;

mod cli;
mod server;

use error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
