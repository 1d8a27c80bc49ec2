//! Schema migration endpoint. Runs the initial notes table creation on demand.

use actix_web::{web, HttpResponse, Responder};

use crate::AppState;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/v1/migration/01").route(web::get().to(run_migration_01)));
}

async fn run_migration_01(data: web::Data<AppState>) -> impl Responder {
    let db = data.db.clone();

    match web::block(move || db.migrate_01()).await {
        Ok(Ok(())) => HttpResponse::Ok().body("Success migration 01"),
        Ok(Err(e)) => {
            log::error!("[DB] Migration 01 failed: {}", e);
            HttpResponse::InternalServerError().body("Error migration: create notes table")
        }
        Err(e) => {
            log::error!("[DB] Migration 01 did not run: {}", e);
            HttpResponse::InternalServerError().body("Error migration: create notes table")
        }
    }
}
