mod errors;
mod lead_handler;
mod types;

pub use errors::LeadError;
pub use lead_handler::capture_lead;
pub use types::{LEAD_CAPTURED_MESSAGE, LeadRequest, LeadResponse};
