use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::NewLead;

/// Everything known about an accepted lead at the moment it is recorded.
#[derive(Debug, Serialize)]
pub struct LeadRecord<'a> {
    pub lead_id: Uuid,
    pub data: &'a NewLead,
    pub created_at: DateTime<Utc>,
}

/// Destination for accepted leads.
///
/// Implementations must not retain state that later requests depend on:
/// the handler calls `record` once per accepted lead and never reads back.
pub trait LeadSink: Send + Sync {
    fn record(&self, record: &LeadRecord<'_>) -> Result<(), anyhow::Error>;
}

/// Writes each lead as a structured event on the process log.
#[derive(Debug, Default, Clone)]
pub struct LogSink;

impl LeadSink for LogSink {
    fn record(&self, record: &LeadRecord<'_>) -> Result<(), anyhow::Error> {
        let lead = serde_json::to_string(record)?;
        tracing::info!(
            lead_id = %record.lead_id,
            created_at = %record.created_at.to_rfc3339(),
            lead = %lead,
            "Lead captured"
        );
        Ok(())
    }
}
