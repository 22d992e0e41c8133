//! Web server for the commit hash API
//!
//! This module provides an Actix-web server exposing `GET /getCommitHash`,
//! which answers with a one-element JSON array holding the version identifier.

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer, Responder};
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::version::VersionProvider;

/// Shared state for request handlers
#[derive(Debug, Clone)]
pub struct ServerState {
    /// Value of the Access-Control-Allow-Origin header
    pub allowed_origin: String,
}

/// Register the API routes and their state
pub fn configure(
    provider: Arc<dyn VersionProvider>,
    state: ServerState,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::from(provider))
            .app_data(web::Data::new(state))
            .service(get_commit_hash);
    }
}

/// Start the web server with the given settings
pub async fn start_web_server(
    provider: Arc<dyn VersionProvider>,
    config: ServerConfig,
) -> std::io::Result<()> {
    let state = ServerState {
        allowed_origin: config.allowed_origin.clone(),
    };

    println!("API running on {}:{}", config.host, config.port);
    crate::debug_context!("web", "Allowed origin: {}", state.allowed_origin);

    HttpServer::new(move || App::new().configure(configure(provider.clone(), state.clone())))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}

/// GET /getCommitHash - Current version identifier
#[actix_web::get("/getCommitHash")]
async fn get_commit_hash(
    req: HttpRequest,
    provider: web::Data<dyn VersionProvider>,
    state: web::Data<ServerState>,
) -> impl Responder {
    let peer = req
        .peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());
    println!("GET from {}", peer);

    let provider = provider.into_inner();
    let result = match web::block(move || provider.identifier()).await {
        Ok(result) => result.map_err(|e| e.to_string()),
        Err(e) => Err(format!("Blocking task failed: {}", e)),
    };

    match result {
        Ok(hash) => HttpResponse::Ok()
            .insert_header(("Access-Control-Allow-Origin", state.allowed_origin.as_str()))
            .json(serde_json::json!([hash])),
        Err(e) => {
            crate::warn_log!("Failed to resolve commit hash: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({ "err": e }))
        }
    }
}
