//! REST API: handlers and route registration shared by the `web` binary and tests.

use crate::{match_records_csv, Round, ScheduleId, ScheduleRequest, ScheduleStore, ServerConfig};
use actix_web::{
    delete, error::InternalError, get, http::StatusCode, post,
    web::{self, Data, Json, Path},
    HttpResponse, Responder,
};
use serde::{Deserialize, Serialize};

/// Shared schedule store.
type AppState = Data<ScheduleStore>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Rounds generated without storing them.
#[derive(Serialize)]
struct PreviewResponse {
    court_count: u32,
    rounds: Vec<Round>,
}

/// Path segment: schedule id (e.g. /api/schedules/{id})
#[derive(Deserialize)]
struct SchedulePath {
    id: ScheduleId,
}

/// JSON error body: `{ "error": message }`.
pub fn error_json(status: StatusCode, message: impl ToString) -> HttpResponse {
    HttpResponse::build(status).json(serde_json::json!({ "error": message.to_string() }))
}

fn lock_error() -> HttpResponse {
    error_json(StatusCode::INTERNAL_SERVER_ERROR, "lock error")
}

fn not_found() -> HttpResponse {
    error_json(StatusCode::NOT_FOUND, "No schedule")
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "squash-schedule-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Generate and store a schedule (returns it with id; client keeps the id for later requests).
#[post("/api/schedules")]
async fn api_create_schedule(
    state: AppState,
    config: Data<ServerConfig>,
    body: Json<ScheduleRequest>,
) -> HttpResponse {
    let schedule = match body.into_inner().build(config.max_participants) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("Rejected schedule request: {}", e);
            return error_json(StatusCode::BAD_REQUEST, e);
        }
    };
    match state.insert(schedule) {
        Ok(s) => {
            log::info!(
                "Created schedule {} ({} players, {} rounds, {} courts)",
                s.id,
                s.participants.len(),
                s.rounds.len(),
                s.court_count
            );
            HttpResponse::Ok().json(s)
        }
        Err(_) => lock_error(),
    }
}

/// Generate rounds for display only; nothing is stored.
#[post("/api/preview")]
async fn api_preview(config: Data<ServerConfig>, body: Json<ScheduleRequest>) -> HttpResponse {
    match body.into_inner().build(config.max_participants) {
        Ok(s) => HttpResponse::Ok().json(PreviewResponse {
            court_count: s.court_count,
            rounds: s.rounds,
        }),
        Err(e) => error_json(StatusCode::BAD_REQUEST, e),
    }
}

/// List stored schedules, newest first.
#[get("/api/schedules")]
async fn api_list_schedules(state: AppState) -> HttpResponse {
    match state.list() {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(_) => lock_error(),
    }
}

/// Get a schedule by id (404 if not found). Touching it refreshes its activity time.
#[get("/api/schedules/{id}")]
async fn api_get_schedule(state: AppState, path: Path<SchedulePath>) -> HttpResponse {
    match state.get(path.id) {
        Ok(Some(s)) => HttpResponse::Ok().json(s),
        Ok(None) => not_found(),
        Err(_) => lock_error(),
    }
}

/// Match records of a schedule as CSV, one row per match.
#[get("/api/schedules/{id}/matches.csv")]
async fn api_schedule_csv(state: AppState, path: Path<SchedulePath>) -> HttpResponse {
    let schedule = match state.get(path.id) {
        Ok(Some(s)) => s,
        Ok(None) => return not_found(),
        Err(_) => return lock_error(),
    };
    match match_records_csv(&schedule) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"schedule-{}.csv\"", schedule.id),
            ))
            .body(body),
        Err(e) => {
            log::error!("CSV export of {} failed: {}", schedule.id, e);
            error_json(StatusCode::INTERNAL_SERVER_ERROR, e)
        }
    }
}

/// Delete a schedule.
#[delete("/api/schedules/{id}")]
async fn api_delete_schedule(state: AppState, path: Path<SchedulePath>) -> HttpResponse {
    match state.remove(path.id) {
        Ok(true) => {
            log::info!("Deleted schedule {}", path.id);
            HttpResponse::NoContent().finish()
        }
        Ok(false) => not_found(),
        Err(_) => lock_error(),
    }
}

/// Malformed or mistyped JSON bodies get the same `{ "error" }` shape as validation errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected request body: {}", err);
        let response = error_json(StatusCode::BAD_REQUEST, &err);
        InternalError::from_response(err, response).into()
    })
}

/// Register the API routes. Expects `Data<ScheduleStore>` and `Data<ServerConfig>` in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(api_health)
        .service(favicon)
        .service(api_create_schedule)
        .service(api_preview)
        .service(api_list_schedules)
        .service(api_schedule_csv)
        .service(api_get_schedule)
        .service(api_delete_schedule);
}
