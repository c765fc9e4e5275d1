use actix_web::{HttpRequest, HttpResponse, http::header::HeaderMap, web};

use crate::authentication::ApiKeyAuth;

const REDACTED: &str = "[REDACTED]";

#[derive(serde::Serialize)]
struct Ack {
    ok: bool,
}

/// What gets written to the log for one debug request.
#[derive(Debug, PartialEq)]
struct EchoedRequest {
    headers: Vec<(String, String)>,
    body: String,
    body_len: usize,
}

impl EchoedRequest {
    fn new(headers: &HeaderMap, body: &[u8], secret_header: &str) -> Self {
        Self {
            headers: collect_headers(headers, secret_header),
            body: String::from_utf8_lossy(body).into_owned(),
            body_len: body.len(),
        }
    }
}

/// Logs the raw request as received. Never fails on the body's content.
#[tracing::instrument(name = "Echoing a debug request", skip_all)]
pub async fn debug_echo(
    request: HttpRequest,
    body: web::Bytes,
    api_key: web::Data<ApiKeyAuth>,
) -> HttpResponse {
    let echoed = EchoedRequest::new(request.headers(), &body, api_key.header_name().as_str());

    tracing::info!(
        headers = ?echoed.headers,
        body = %echoed.body,
        body_len = echoed.body_len,
        "Debug request received"
    );

    HttpResponse::Ok().json(Ack { ok: true })
}

/// Header pairs with the value of `secret_header` masked.
fn collect_headers(headers: &HeaderMap, secret_header: &str) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let value = if name.as_str() == secret_header {
                REDACTED.to_string()
            } else {
                String::from_utf8_lossy(value.as_bytes()).into_owned()
            };
            (name.to_string(), value)
        })
        .collect()
}
