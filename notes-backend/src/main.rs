use actix_cors::Cors;
use actix_web::{middleware::Logger, middleware::NormalizePath, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod db;
mod models;
mod notes;

#[cfg(test)]
mod test_support;

use config::Config;
use db::{Database, SqliteNoteStore};
use notes::{NoteActions, NoteStore};

pub struct AppState {
    pub db: Arc<Database>,
    pub config: Config,
    /// Note use cases, all sharing one store
    pub notes: NoteActions,
}

fn build_cors(config: &Config) -> Cors {
    let cors = match &config.cors_allowed_origin {
        Some(origin) => Cors::default().allowed_origin(origin),
        None => Cors::default().allow_any_origin(),
    };

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allow_any_header()
        .max_age(300)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    log::info!("notes-backend v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();
    let port = config.port;
    let bind_address = config.bind_address.clone();

    log::info!("Initializing database at {}", config.database_url);
    let db = match Database::new(&config.database_url, config.db_pool_size) {
        Ok(db) => Arc::new(db),
        Err(e) => {
            log::error!("Failed to open database: {}", e);
            return Err(std::io::Error::other(e));
        }
    };

    if config.auto_migrate {
        if let Err(e) = db.migrate_01() {
            log::error!("Failed to create notes table: {}", e);
            return Err(std::io::Error::other(e));
        }
    } else {
        log::info!("AUTO_MIGRATE disabled; run GET /api/v1/migration/01 to create the notes table");
    }

    let store: Arc<dyn NoteStore> = Arc::new(SqliteNoteStore::new(Arc::clone(&db)));
    let note_actions = NoteActions::new(store);

    log::info!("Starting server on {}:{}", bind_address, port);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(AppState {
                db: Arc::clone(&db),
                config: config.clone(),
                notes: note_actions.clone(),
            }))
            .wrap(NormalizePath::trim())
            .wrap(Logger::default())
            .wrap(build_cors(&config))
            .configure(controllers::health::config_routes)
            .configure(controllers::migration::config)
            .configure(controllers::notes::config)
    })
    .bind((bind_address.as_str(), port))?
    .run();

    // Get server handle for graceful shutdown
    let server_handle = server.handle();

    // Spawn Ctrl+C handler
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        log::info!("Received Ctrl+C, shutting down...");

        let server_stop = server_handle.stop(true);
        if tokio::time::timeout(std::time::Duration::from_secs(30), server_stop).await.is_err() {
            log::warn!("Timeout waiting for HTTP server to stop, forcing exit...");
        }

        log::info!("Shutdown complete");
    });

    server.await
}
