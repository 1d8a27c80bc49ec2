//! Notes REST API - CRUD and paginated listing under `/api/v1/note`.
//!
//! Handlers decode the request, run one note action, and map the outcome to
//! a status code. Bodies must be `application/json`.

use actix_web::{error::InternalError, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::models::{CreateArgs, DeleteNotesRequest, UpdateNoteRequest};
use crate::notes::pagination::ListNotesRequest;
use crate::notes::{Context, ErrorKind, NoteError};
use crate::AppState;

const INVALID_PARAMS: &str = "invalid request params";
const INNER_FAILURE: &str = "failed during inner process";

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::resource("/api/v1/note")
                .route(web::post().to(create_note))
                .route(web::get().to(list_notes))
                .route(web::delete().to(delete_notes)),
        )
        .service(
            web::resource("/api/v1/note/{note_id}")
                .route(web::get().to(get_note))
                .route(web::put().to(update_note)),
        );
}

/// Reject non-JSON content types and malformed bodies before any action runs
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(true)
        .error_handler(|err, req| {
            log::debug!("[NOTES] Rejected body for {} {}: {}", req.method(), req.path(), err);
            InternalError::from_response(err, bad_request(INVALID_PARAMS)).into()
        })
}

fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": message }))
}

/// Fresh cancellation context for one request, bounded by the configured timeout
fn request_context(state: &AppState) -> Context {
    match state.config.request_timeout {
        Some(timeout) => Context::with_timeout(timeout),
        None => Context::new(),
    }
}

fn parse_note_id(raw: &str) -> Result<Uuid, HttpResponse> {
    Uuid::parse_str(raw).map_err(|e| {
        log::debug!("[NOTES] Invalid note id {:?}: {}", raw, e);
        bad_request(INVALID_PARAMS)
    })
}

/// Not-found and validation are the client's problem; everything else is
/// logged here and reported without detail.
fn error_response(operation: &str, err: &NoteError) -> HttpResponse {
    match err.kind() {
        ErrorKind::NotFound => HttpResponse::NotFound().json(serde_json::json!({
            "error": "Not Found"
        })),
        ErrorKind::Validation => {
            log::debug!("[NOTES] {} rejected: {}", operation, err);
            bad_request(&err.to_string())
        }
        _ => {
            log::error!("[NOTES] {} failed: {}", operation, err);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": INNER_FAILURE
            }))
        }
    }
}

/// Create a note
async fn create_note(
    data: web::Data<AppState>,
    body: web::Json<CreateArgs>,
) -> impl Responder {
    let ctx = request_context(&data);

    match data.notes.create.run(&ctx, body.into_inner()).await {
        Ok(note) => {
            log::debug!("[NOTES] Handled create note {}", note.id);
            HttpResponse::Ok().json(note)
        }
        Err(e) => error_response("create note", &e),
    }
}

/// List one page of notes; pagination comes in the JSON body
async fn list_notes(
    data: web::Data<AppState>,
    body: web::Json<ListNotesRequest>,
) -> impl Responder {
    let ctx = request_context(&data);

    match data.notes.list.run(&ctx, body.into_inner().into()).await {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(e) => error_response("list notes", &e),
    }
}

/// Get a note by id
async fn get_note(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = match parse_note_id(&path.into_inner()) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let ctx = request_context(&data);

    match data.notes.get_by_id.run(&ctx, id).await {
        Ok(note) => HttpResponse::Ok().json(note),
        Err(e) => error_response("get note", &e),
    }
}

/// Replace label, body and tags of a note
async fn update_note(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateNoteRequest>,
) -> impl Responder {
    let id = match parse_note_id(&path.into_inner()) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let ctx = request_context(&data);

    match data.notes.update.run(&ctx, body.into_inner().into_args(id)).await {
        Ok(note) => HttpResponse::Ok().json(note),
        Err(e) => error_response("update note", &e),
    }
}

/// Delete notes by id
async fn delete_notes(
    data: web::Data<AppState>,
    body: web::Json<DeleteNotesRequest>,
) -> impl Responder {
    let req = body.into_inner();
    if req.note_ids.is_empty() {
        log::debug!("[NOTES] Delete request without ids");
        return bad_request(INVALID_PARAMS);
    }
    let ctx = request_context(&data);

    match data.notes.delete.run(&ctx, &req.note_ids).await {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(e) => error_response("delete notes", &e),
    }
}
