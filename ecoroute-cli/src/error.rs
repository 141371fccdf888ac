//! Error types emitted by the EcoRoute CLI.
//!
//! Keep this error type reasonably small, as the CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use ecoroute_core::PlanError;
use thiserror::Error;

/// Errors emitted by the EcoRoute CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing argument.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist or is not a file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        /// Argument the path came from.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// Opening the route request file failed.
    #[error("failed to open route request at {path:?}: {source}")]
    OpenRequest {
        /// Path of the request file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Route request JSON could not be decoded.
    #[error("failed to parse route request JSON at {path:?}: {source}")]
    ParseRequest {
        /// Path of the request file.
        path: Utf8PathBuf,
        /// JSON decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// The route request payload failed validation.
    #[error("route request in {path:?} failed validation: {source}")]
    InvalidRequest {
        /// Path of the request file.
        path: Utf8PathBuf,
        /// Validation failure from the planning seam.
        #[source]
        source: PlanError,
    },
    /// The planner rejected the request.
    #[error("planner failed: {source}")]
    Plan {
        /// Failure returned by the planner.
        source: PlanError,
    },
    /// Serializing the route response failed.
    #[error("failed to serialize route response: {0}")]
    SerializeResponse(#[source] serde_json::Error),
    /// Writing the route output failed.
    #[error("failed to write route output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
