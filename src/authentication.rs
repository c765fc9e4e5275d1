use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header::{HeaderMap, HeaderName},
    middleware::Next,
    web,
};
use anyhow::Context;
use secrecy::{ExposeSecret, SecretString};

use crate::{configuration::AuthenticationSettings, routes::LeadError};

/// Shared-secret header check. Disabled when constructed without a key.
#[derive(Debug, Clone)]
pub struct ApiKeyAuth {
    header_name: HeaderName,
    api_key: Option<SecretString>,
}

impl ApiKeyAuth {
    pub fn new(header_name: &str, api_key: Option<SecretString>) -> Result<Self, anyhow::Error> {
        let header_name = HeaderName::from_bytes(header_name.as_bytes())
            .with_context(|| format!("'{header_name}' is not a valid header name."))?;

        Ok(Self {
            header_name,
            api_key,
        })
    }

    pub fn from_settings(settings: &AuthenticationSettings) -> Result<Self, anyhow::Error> {
        Self::new(&settings.header_name, settings.api_key().cloned())
    }

    pub fn header_name(&self) -> &HeaderName {
        &self.header_name
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Exact match of the header value against the configured key.
    pub fn verify(&self, headers: &HeaderMap) -> Result<(), anyhow::Error> {
        let Some(expected) = &self.api_key else {
            return Ok(());
        };

        let provided = headers
            .get(&self.header_name)
            .with_context(|| format!("The '{}' header is missing.", self.header_name))?
            .to_str()
            .with_context(|| {
                format!("The '{}' header was not a valid UTF8 string.", self.header_name)
            })?;

        if provided != expected.expose_secret() {
            anyhow::bail!("The '{}' header does not match the configured key.", self.header_name);
        }

        Ok(())
    }
}

/// Rejects the request with 401 before the body is read if the key does not match.
pub async fn require_api_key(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let api_key = req
        .app_data::<web::Data<ApiKeyAuth>>()
        .context("API key settings are not registered with the application.")
        .map_err(LeadError::UnexpectedError)?;

    api_key.verify(req.headers()).map_err(LeadError::AuthError)?;

    next.call(req).await
}
