use crate::app_config::AppConfig;
use crate::attendance::{AttendanceMarker, FixedLocationProvider, LogSink};
use crate::cli::Cli;
use crate::geofence::GeofenceEvaluator;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app_config;
mod attendance;
mod cli;
mod coordinate_deserializer;
mod domain;
mod geofence;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!(
        center = %config.office().center(),
        radius_km = config.office().radius_km(),
        "✅  Loaded configuration"
    );

    let provider = FixedLocationProvider::new(cli.location()?);
    let evaluator = GeofenceEvaluator::new(config.office().clone());
    let marker = AttendanceMarker::new(evaluator, provider, LogSink, config.location().clone());

    let record = marker.mark(cli.status.into()).await?;

    match (record.location(), record.distance_km()) {
        (Some(location), Some(distance_km)) if record.outside_boundary() => println!("{} is outside office ({:.2} km)", location, distance_km),
        (Some(location), Some(distance_km)) => println!("{} is inside office ({:.2} km)", location, distance_km),
        _ => println!("location unavailable, enable location to verify attendance"),
    }
    if record.needs_review() {
        println!("{} attendance flagged for review", record.status());
    }

    Ok(())
}
