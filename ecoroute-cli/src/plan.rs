//! Plan command implementation for the EcoRoute CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ecoroute_core::{Delivery, Depot, PlanRequest, Route, RoutePlanner, Vehicle};
use ecoroute_planner::NearestNeighbourPlanner;
use geo::Coord;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{CliError, ARG_PLAN_REQUEST, ENV_PLAN_REQUEST};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a closed delivery route. The request is a \
                 JSON-encoded vehicle, depot, and list of deliveries; its \
                 path can come from the positional argument, configuration \
                 files, or environment variables.",
    about = "Plan a closed delivery route from a JSON request"
)]
#[ortho_config(prefix = "ECOROUTE")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing the route request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
}

impl PlanArgs {
    fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
}

impl PlanConfig {
    fn validate_sources(&self) -> Result<(), CliError> {
        if self.request_path.is_file() {
            Ok(())
        } else {
            Err(CliError::MissingSourceFile {
                field: ARG_PLAN_REQUEST,
                path: self.request_path.clone(),
            })
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;
        Ok(Self { request_path })
    }
}

/// JSON shape of a route request at the CLI boundary.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RouteRequest {
    vehicle: VehicleParams,
    depot: PointParams,
    #[serde(default)]
    deliveries: Vec<DeliveryParams>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct VehicleParams {
    id: u64,
    max_energy: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct PointParams {
    x: f64,
    y: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct DeliveryParams {
    id: u64,
    x: f64,
    y: f64,
}

impl RouteRequest {
    fn into_plan_request(self) -> PlanRequest {
        PlanRequest {
            vehicle: Vehicle::new(self.vehicle.id, self.vehicle.max_energy),
            depot: Depot::new(Coord {
                x: self.depot.x,
                y: self.depot.y,
            }),
            deliveries: self
                .deliveries
                .into_iter()
                .map(|d| Delivery::new(d.id, Coord { x: d.x, y: d.y }))
                .collect(),
        }
    }
}

/// JSON shape of the planned route written to stdout.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct RouteResponse {
    path: Vec<PointParams>,
    total_distance: f64,
    energy_used: f64,
    remaining_energy: f64,
}

impl From<&Route> for RouteResponse {
    fn from(route: &Route) -> Self {
        Self {
            path: route
                .path
                .iter()
                .map(|point| PointParams {
                    x: point.x,
                    y: point.y,
                })
                .collect(),
            total_distance: route.total_distance,
            energy_used: route.energy_used,
            remaining_energy: route.remaining_energy,
        }
    }
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    let mut stdout = std::io::stdout().lock();
    run_plan_with(&config, &NearestNeighbourPlanner, &mut stdout)
}

pub(super) fn run_plan_with(
    config: &PlanConfig,
    planner: &dyn RoutePlanner,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let response = execute_plan(config, planner)?;
    write_route_response(writer, &response)
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_plan(
    config: &PlanConfig,
    planner: &dyn RoutePlanner,
) -> Result<RouteResponse, CliError> {
    let request = load_route_request(&config.request_path)?;
    let plan_request = request.into_plan_request();
    plan_request
        .validate()
        .map_err(|source| CliError::InvalidRequest {
            path: config.request_path.clone(),
            source,
        })?;
    let response = planner
        .plan(&plan_request)
        .map_err(|source| CliError::Plan { source })?;
    Ok(RouteResponse::from(&response.route))
}

/// Loads a JSON-encoded [`RouteRequest`] from disk.
fn load_route_request(path: &Utf8Path) -> Result<RouteRequest, CliError> {
    let file = std::fs::File::open(path.as_std_path()).map_err(|source| CliError::OpenRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_route_response(writer: &mut dyn Write, response: &RouteResponse) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(response).map_err(CliError::SerializeResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::Value;
    use tempfile::TempDir;

    const SAMPLE_REQUEST: &str = r#"{
        "vehicle": { "id": 1, "max_energy": 100.0 },
        "depot": { "x": 0.0, "y": 0.0 },
        "deliveries": [
            { "id": 1, "x": 2.0, "y": 3.0 },
            { "id": 2, "x": 5.0, "y": 1.0 },
            { "id": 3, "x": 6.0, "y": 4.0 },
            { "id": 4, "x": 8.0, "y": 2.0 }
        ]
    }"#;

    #[fixture]
    fn request_dir() -> TempDir {
        TempDir::new().expect("create temp dir")
    }

    fn write_request(dir: &TempDir, contents: &str) -> PlanConfig {
        let path = dir.path().join("request.json");
        let mut file = std::fs::File::create(&path).expect("create request file");
        file.write_all(contents.as_bytes()).expect("write request");
        PlanConfig {
            request_path: Utf8PathBuf::from_path_buf(path).expect("utf-8 temp path"),
        }
    }

    #[rstest]
    fn plans_a_request_file_end_to_end(request_dir: TempDir) {
        let config = write_request(&request_dir, SAMPLE_REQUEST);
        let mut output = Vec::new();

        run_plan_with(&config, &NearestNeighbourPlanner, &mut output)
            .expect("planning should succeed");

        let payload: Value = serde_json::from_slice(&output).expect("valid JSON output");
        let path = payload["path"].as_array().expect("path array");
        assert_eq!(path.len(), 6);
        assert_eq!(path[0]["x"], path[5]["x"]);
        assert_eq!(path[1]["x"].as_f64(), Some(2.0));
        let total = payload["total_distance"].as_f64().expect("distance");
        assert!((total - 21.448).abs() < 1e-3);
        assert!(payload["remaining_energy"].as_f64().expect("energy") > 0.0);
    }

    #[rstest]
    fn missing_request_file_is_reported(request_dir: TempDir) {
        let config = PlanConfig {
            request_path: Utf8PathBuf::from_path_buf(request_dir.path().join("absent.json"))
                .expect("utf-8 temp path"),
        };
        let err = config.validate_sources().expect_err("file is absent");
        assert!(matches!(err, CliError::MissingSourceFile { .. }));
    }

    #[rstest]
    fn corrupt_json_is_a_parse_error(request_dir: TempDir) {
        let config = write_request(&request_dir, "not json");
        let mut output = Vec::new();
        let err = run_plan_with(&config, &NearestNeighbourPlanner, &mut output)
            .expect_err("payload is not JSON");
        assert!(matches!(err, CliError::ParseRequest { .. }));
    }

    #[rstest]
    fn invalid_vehicle_capacity_is_rejected_before_planning(request_dir: TempDir) {
        let config = write_request(
            &request_dir,
            r#"{
                "vehicle": { "id": 1, "max_energy": -5.0 },
                "depot": { "x": 0.0, "y": 0.0 },
                "deliveries": []
            }"#,
        );
        let mut output = Vec::new();
        let err = run_plan_with(&config, &NearestNeighbourPlanner, &mut output)
            .expect_err("negative capacity");
        assert!(matches!(err, CliError::InvalidRequest { .. }));
        assert!(output.is_empty());
    }

    #[rstest]
    fn empty_delivery_list_yields_degenerate_loop(request_dir: TempDir) {
        let config = write_request(
            &request_dir,
            r#"{
                "vehicle": { "id": 1, "max_energy": 100.0 },
                "depot": { "x": 1.5, "y": -2.0 }
            }"#,
        );
        let mut output = Vec::new();
        run_plan_with(&config, &NearestNeighbourPlanner, &mut output).expect("valid request");

        let payload: Value = serde_json::from_slice(&output).expect("valid JSON output");
        assert_eq!(payload["path"].as_array().expect("path array").len(), 2);
        assert_eq!(payload["total_distance"].as_f64(), Some(0.0));
    }

    #[rstest]
    fn missing_request_argument_is_reported() {
        let err = PlanConfig::try_from(PlanArgs { request_path: None })
            .expect_err("no path supplied");
        assert!(matches!(err, CliError::MissingArgument { .. }));
    }
}
