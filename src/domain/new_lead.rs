use super::{LeadCity, LeadName, LeadWebsite};

/// A lead submission that passed every check and is ready to be recorded.
#[derive(Debug, Clone, serde::Serialize)]
pub struct NewLead {
    pub is_owner: bool,
    pub speciality: Option<String>,
    pub city: LeadCity,
    pub full_name: LeadName,
    pub website: Option<LeadWebsite>,
    pub preferred_contact_time: Option<String>,
    pub monthly_appointments: Option<i64>,
    pub average_ticket_size: Option<f64>,
    pub ad_budget: Option<f64>,
    pub implementation_timeline: Option<String>,
}
