use actix_web::{HttpResponse, web};
use anyhow::Context;
use chrono::Utc;
use uuid::Uuid;

use super::{
    errors::LeadError,
    types::{LEAD_CAPTURED_MESSAGE, LeadRequest, LeadResponse},
};
use crate::{
    domain::NewLead,
    lead_sink::{LeadRecord, LeadSink},
};

#[tracing::instrument(
    name = "Capturing a new lead",
    skip(body, sink),
    fields(lead_id = tracing::field::Empty, is_owner = %body.is_owner)
)]
pub async fn capture_lead(
    body: web::Json<LeadRequest>,
    sink: web::Data<dyn LeadSink>,
) -> Result<HttpResponse, LeadError> {
    let new_lead: NewLead = body
        .into_inner()
        .try_into()
        .map_err(LeadError::ValidationError)?;

    let lead_id = Uuid::new_v4();
    let timestamp = Utc::now();
    tracing::Span::current().record("lead_id", tracing::field::display(&lead_id));

    sink.record(&LeadRecord {
        lead_id,
        data: &new_lead,
        created_at: timestamp,
    })
    .context("Failed to record the accepted lead.")?;

    Ok(HttpResponse::Ok().json(LeadResponse {
        success: true,
        message: LEAD_CAPTURED_MESSAGE.into(),
        lead_id: lead_id.to_string(),
        timestamp,
    }))
}
