mod lead_city;
mod lead_name;
mod lead_website;
mod new_lead;

pub use lead_city::LeadCity;
pub use lead_name::LeadName;
pub use lead_website::LeadWebsite;
pub use new_lead::NewLead;
