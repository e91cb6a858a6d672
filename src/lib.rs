#[cfg(feature = "server")]
use std::time::Duration;

#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};

#[cfg(feature = "server")]
use crate::gateway::cached::CachedGateway;
#[cfg(feature = "server")]
use crate::gateway::http::HttpGateway;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;

pub mod charts;
pub mod controller;
pub mod domain;
pub mod gateway;
pub mod pagination;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Builds the backend gateway stack described by `server_config`.
#[cfg(feature = "server")]
pub fn build_gateway(server_config: &ServerConfig) -> std::io::Result<routes::Gateway> {
    let http = HttpGateway::new(
        server_config.backend_url.clone(),
        Duration::from_secs(server_config.request_timeout_secs),
    )
    .map_err(|e| std::io::Error::other(format!("Failed to build backend client: {e}")))?;

    Ok(CachedGateway::new(
        http,
        server_config.cache_capacity,
        Duration::from_secs(server_config.cache_ttl_secs),
    ))
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let gateway = web::Data::new(build_gateway(&server_config)?);

    // Keys and stores for flash messages.
    let secret_key = Key::try_from(server_config.secret.as_bytes())
        .map_err(|e| std::io::Error::other(format!("Invalid secret: {e}")))?;

    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = routes::build_tera(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .configure(routes::configure)
            .app_data(web::Data::new(tera.clone()))
            .app_data(gateway.clone())
    })
    .bind(bind_address)?
    .run()
    .await
}
