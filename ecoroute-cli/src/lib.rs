//! Command-line boundary for the EcoRoute planning engine.
//!
//! The CLI deserializes a JSON route request into the domain entities, runs
//! the nearest-neighbour planner, and serializes the planned route back
//! out. Domain-rule failures surface as distinct user-visible errors.

#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod plan;

pub use error::CliError;

pub(crate) const ARG_PLAN_REQUEST: &str = "request";
pub(crate) const ENV_PLAN_REQUEST: &str = "ECOROUTE_CMDS_PLAN_REQUEST_PATH";

/// Run the EcoRoute CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] for argument, configuration, request, or planning
/// failures; the binary maps it to stderr and a non-zero exit code.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => plan::run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "ecoroute",
    about = "Delivery route planning for a single vehicle",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan a closed delivery route from a JSON request.
    Plan(plan::PlanArgs),
}
