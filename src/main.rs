use std::sync::Arc;

use actix_web::middleware::{Logger, NormalizePath};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;

mod api;
mod config;
mod db;
mod docs;
mod error;
mod model;
mod routes;
mod service;
mod state;
mod store;

use config::Config;
use db::init_db;

use crate::docs::ApiDoc;
use crate::state::AppState;
use crate::store::mysql::MySqlStore;
use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .init();

    info!(
        addr = %config.server_addr,
        duplicate_attendance = %config.policies.duplicate_attendance,
        employee_delete = %config.policies.employee_delete,
        "Server starting..."
    );

    let pool = init_db(&config.database_url).await?;
    if config.run_migrations {
        db::run_migrations(&pool).await?;
    }

    let state = Data::new(AppState::new(
        Arc::new(MySqlStore::new(pool)),
        config.policies,
    ));
    let server_addr = config.server_addr.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                // wildcard {_:.*} so the UI's JS/CSS assets resolve
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {server_addr}"))?
    .run()
    .await
    .context("HTTP server terminated with an error")
}
