use crate::domain::AttendanceRecord;
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;
use tracing::{info, instrument};

/// Destination for attendance records, typically the remote attendance API.
#[async_trait]
pub trait AttendanceSink: Debug + Send + Sync {
    async fn submit(&self, record: &AttendanceRecord) -> Result<(), SinkError>;
}

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("unable to serialize attendance record: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("attendance record rejected: {0}")]
    Rejected(String),
}

/// Writes every record to the log as JSON.
#[derive(Debug, Default)]
pub struct LogSink;

#[async_trait]
impl AttendanceSink for LogSink {
    #[instrument(skip_all)]
    async fn submit(&self, record: &AttendanceRecord) -> Result<(), SinkError> {
        let json = serde_json::to_string(record)?;
        info!(record = %json, needs_review = record.needs_review(), "📝 Submitted {} attendance", record.status());
        Ok(())
    }
}
