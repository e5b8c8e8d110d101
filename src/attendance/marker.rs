use crate::app_config::LocationSettings;
use crate::attendance::{AttendanceSink, LocationError, LocationProvider, SinkError};
use crate::domain::{AttendanceRecord, AttendanceStatus, Coordinate};
use crate::geofence::GeofenceEvaluator;
use chrono::Utc;
use thiserror::Error;
use tokio::time::timeout;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, info, instrument, warn};

/// Runs attendance-marking attempts: acquire a location, check it against the office zone, submit the record.
#[derive(Debug)]
pub struct AttendanceMarker<P, S> {
    evaluator: GeofenceEvaluator,
    provider: P,
    sink: S,
    settings: LocationSettings,
}

impl<P, S> AttendanceMarker<P, S>
where
    P: LocationProvider,
    S: AttendanceSink,
{
    pub fn new(evaluator: GeofenceEvaluator, provider: P, sink: S, settings: LocationSettings) -> Self {
        AttendanceMarker {
            evaluator,
            provider,
            sink,
            settings,
        }
    }

    #[instrument(skip(self))]
    pub async fn mark(&self, status: AttendanceStatus) -> Result<AttendanceRecord, MarkAttendanceError> {
        info!("🕘 Marking attendance...");
        let marked_at = Utc::now();

        let record = match self.acquire_location().await {
            Ok(location) => {
                let evaluation = self.evaluator.evaluate(&location);
                let record = AttendanceRecord::verified(status, marked_at, location, &evaluation);
                if record.needs_review() {
                    warn!("🚧 {} from {}, flagging for review", status, evaluation);
                }
                record
            }
            Err(LocationError::PermissionDenied) => {
                warn!("📵 Location permission denied, enable location to verify attendance");
                AttendanceRecord::unverified(status, marked_at)
            }
            Err(error) => {
                warn!("📵 {}, enable location to verify attendance", error);
                AttendanceRecord::unverified(status, marked_at)
            }
        };

        self.sink.submit(&record).await?;
        info!(needs_review = record.needs_review(), "🕘 Marking attendance... OK");

        Ok(record)
    }

    #[instrument(skip_all)]
    async fn acquire_location(&self) -> Result<Coordinate, LocationError> {
        let strategy = ExponentialBackoff::from_millis(self.settings.retry_ms())
            .factor(2)
            .max_delay(self.settings.retry_max_delay())
            .map(jitter)
            .take(self.settings.max_attempts().saturating_sub(1));

        debug!("📍 Acquiring device location...");
        let location = RetryIf::spawn(strategy, || self.try_acquire_location(), LocationError::is_retryable).await?;
        debug!(location = %location, "📍 Acquiring device location... OK");

        Ok(location)
    }

    async fn try_acquire_location(&self) -> Result<Coordinate, LocationError> {
        let limit = self.settings.timeout();
        match timeout(limit, self.provider.current_location()).await {
            Ok(Ok(location)) => Ok(location),
            Ok(Err(error)) => {
                debug!("⚠️ Location attempt failed: {}", error);
                Err(error)
            }
            Err(_) => {
                debug!("⏳ No location within {:?}", limit);
                Err(LocationError::Timeout(limit))
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum MarkAttendanceError {
    #[error(transparent)]
    Sink(#[from] SinkError),
}
