use std::error::Error;

use actix_web::{HttpRequest, error::JsonPayloadError};

use super::lead::LeadError;

pub fn error_chain_fmt(e: &impl Error, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    writeln!(f, "{e}\n")?;
    let mut current = e.source();

    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{cause}")?;
        current = cause.source();
    }

    Ok(())
}

/// Turns body extraction failures into `400 {"detail": ...}`.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    LeadError::ValidationError(err.to_string()).into()
}
