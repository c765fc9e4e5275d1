use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::middleware::from_fn;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use crate::authentication::{ApiKeyAuth, require_api_key};
use crate::configuration::Settings;
use crate::lead_sink::{LeadSink, LogSink};
use crate::routes::{capture_lead, debug_echo, health_check, json_error_handler};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn build(config: Settings) -> Result<Self, anyhow::Error> {
        Self::build_with_sink(config, Arc::new(LogSink))
    }

    /// Same as [`Application::build`] but records accepted leads into `sink`.
    pub fn build_with_sink(config: Settings, sink: Arc<dyn LeadSink>) -> Result<Self, anyhow::Error> {
        let api_key = ApiKeyAuth::from_settings(&config.authentication)?;

        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener =
            TcpListener::bind(&address).with_context(|| format!("Failed to bind {address}."))?;
        let port = listener.local_addr()?.port();
        let server = run(
            listener,
            api_key,
            sink,
            config.application.debug_body_limit_bytes,
        )?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    api_key: ApiKeyAuth,
    sink: Arc<dyn LeadSink>,
    debug_body_limit: usize,
) -> Result<Server, anyhow::Error> {
    if api_key.is_enabled() {
        tracing::info!(
            header = %api_key.header_name(),
            "Lead submissions require a shared-secret header"
        );
    } else {
        tracing::warn!("No API key configured, lead submissions are not authenticated");
    }

    let api_key = web::Data::new(api_key);
    let sink: web::Data<dyn LeadSink> = web::Data::from(sink);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("/", web::get().to(health_check))
            .service(
                web::resource("/api/chatbot/debug")
                    .app_data(web::PayloadConfig::new(debug_body_limit))
                    .route(web::post().to(debug_echo)),
            )
            .service(
                web::resource("/api/chatbot/lead").route(
                    web::post()
                        .to(capture_lead)
                        .wrap(from_fn(require_api_key)),
                ),
            )
            .app_data(api_key.clone())
            .app_data(sink.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
