use chrono::{DateTime, Utc};

use crate::domain::{LeadCity, LeadName, LeadWebsite, NewLead};

pub const LEAD_CAPTURED_MESSAGE: &str = "Lead captured successfully";

#[derive(serde::Deserialize, Debug)]
pub struct LeadRequest {
    /// Whether the person filling the form owns the business.
    pub is_owner: bool,
    /// Medical or business speciality, e.g. "Dentistry".
    pub speciality: Option<String>,
    /// City where the business operates.
    pub city: String,
    /// Full name of the contact person.
    pub full_name: String,
    /// Business website.
    pub website: Option<LeadWebsite>,
    /// When the contact prefers to be reached, free text.
    pub preferred_contact_time: Option<String>,
    /// Appointments booked per month.
    pub monthly_appointments: Option<i64>,
    /// Average revenue per appointment.
    pub average_ticket_size: Option<f64>,
    /// Monthly advertising budget.
    pub ad_budget: Option<f64>,
    /// How soon the business wants to start.
    pub implementation_timeline: Option<String>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct LeadResponse {
    pub success: bool,
    pub message: String,
    pub lead_id: String,
    pub timestamp: DateTime<Utc>,
}

impl TryFrom<LeadRequest> for NewLead {
    type Error = String;

    // The name is checked before the city: only the first failure is reported.
    fn try_from(value: LeadRequest) -> Result<Self, Self::Error> {
        let full_name = LeadName::parse(value.full_name)?;
        let city = LeadCity::parse(value.city)?;

        Ok(Self {
            is_owner: value.is_owner,
            speciality: value.speciality,
            city,
            full_name,
            website: value.website,
            preferred_contact_time: value.preferred_contact_time,
            monthly_appointments: value.monthly_appointments,
            average_ticket_size: value.average_ticket_size,
            ad_budget: value.ad_budget,
            implementation_timeline: value.implementation_timeline,
        })
    }
}
