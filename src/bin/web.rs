//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{self, Bytes, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use badminton_session_web::{
    read_roster_csv, PlayerField, RosterEditor, Session, SessionId, SessionRoster,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Per-session entry: roster editor + last activity time (for auto-cleanup).
struct SessionEntry {
    editor: RosterEditor<SessionRoster>,
    last_activity: Instant,
}

/// In-memory state: many sessions by ID. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<SessionId, SessionEntry>>>;

/// Inactivity threshold: sessions not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateSessionBody {
    name: String,
    #[serde(default = "default_courts")]
    number_of_courts: u32,
    #[serde(default = "default_players_per_court")]
    max_players_per_court: u32,
    #[serde(default)]
    scheduled_at: Option<DateTime<Utc>>,
}

fn default_courts() -> u32 {
    2
}

fn default_players_per_court() -> u32 {
    4
}

/// Path segment: session id (e.g. /api/sessions/{id})
#[derive(Deserialize)]
struct SessionPath {
    id: SessionId,
}

/// Path segments: session id and draft row index (e.g. /api/sessions/{id}/drafts/{index})
#[derive(Deserialize)]
struct SessionDraftPath {
    id: SessionId,
    index: usize,
}

/// Path segments: session id and player id (e.g. /api/sessions/{id}/players/{player_id})
#[derive(Deserialize)]
struct SessionPlayerPath {
    id: SessionId,
    player_id: Uuid,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "badminton-session-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Create a new session (returns its roster view; client stores the id for subsequent requests).
#[post("/api/sessions")]
async fn api_create_session(state: AppState, body: Json<CreateSessionBody>) -> HttpResponse {
    let mut session = Session::new(
        body.name.trim(),
        body.number_of_courts,
        body.max_players_per_court,
    );
    session.scheduled_at = body.scheduled_at;
    let id = session.id;
    let editor = RosterEditor::new(SessionRoster::new(session));
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        id,
        SessionEntry {
            editor,
            last_activity: Instant::now(),
        },
    );
    HttpResponse::Ok().json(g.get(&id).unwrap().editor.view())
}

/// Get a session's roster view by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/sessions/{id}")]
async fn api_get_session(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(entry.editor.view())
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    }
}

/// Add a pending draft row (rejected once the session is at capacity).
#[post("/api/sessions/{id}/drafts")]
async fn api_add_draft(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    };
    entry.last_activity = Instant::now();
    match entry.editor.add_player_row() {
        Ok(()) => HttpResponse::Ok().json(entry.editor.view()),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Update one field of the draft row at `index`.
#[put("/api/sessions/{id}/drafts/{index}")]
async fn api_update_draft(
    state: AppState,
    path: Path<SessionDraftPath>,
    body: Json<PlayerField>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    };
    entry.last_activity = Instant::now();
    match entry.editor.update_new_player(path.index, body.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(entry.editor.view()),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Remove the draft row at `index`.
#[delete("/api/sessions/{id}/drafts/{index}")]
async fn api_remove_draft(state: AppState, path: Path<SessionDraftPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    };
    entry.last_activity = Instant::now();
    match entry.editor.remove_player_row(path.index) {
        Ok(()) => HttpResponse::Ok().json(entry.editor.view()),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Discard all pending draft rows.
#[delete("/api/sessions/{id}/drafts")]
async fn api_cancel_drafts(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    };
    entry.last_activity = Instant::now();
    entry.editor.cancel_add_players();
    HttpResponse::Ok().json(entry.editor.view())
}

/// Commit all pending drafts to the roster. On validation failure the
/// response is 400 and the returned view carries the per-row errors.
#[post("/api/sessions/{id}/drafts/save")]
async fn api_save_drafts(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    };
    entry.last_activity = Instant::now();
    if entry.editor.save_player_changes() {
        HttpResponse::Ok().json(entry.editor.view())
    } else {
        HttpResponse::BadRequest().json(entry.editor.view())
    }
}

/// Bulk-add drafts from a CSV body (columns: name,gender,level,level_description,require_confirm_info).
#[post("/api/sessions/{id}/drafts/import")]
async fn api_import_drafts(state: AppState, path: Path<SessionPath>, body: Bytes) -> HttpResponse {
    let records = match read_roster_csv(body.as_ref()) {
        Ok(records) => records,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    };
    entry.last_activity = Instant::now();
    match entry.editor.import_players(records) {
        Ok(added) => {
            log::info!("Imported {} draft row(s) into session {}", added, path.id);
            HttpResponse::Ok().json(entry.editor.view())
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Enter edit mode for a saved player.
#[post("/api/sessions/{id}/players/{player_id}/edit")]
async fn api_start_editing(state: AppState, path: Path<SessionPlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    };
    entry.last_activity = Instant::now();
    match entry.editor.start_editing_player(path.player_id) {
        Ok(()) => HttpResponse::Ok().json(entry.editor.view()),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Update one field of a player's editing copy.
#[put("/api/sessions/{id}/players/{player_id}/edit")]
async fn api_update_editing(
    state: AppState,
    path: Path<SessionPlayerPath>,
    body: Json<PlayerField>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    };
    entry.last_activity = Instant::now();
    match entry
        .editor
        .update_editing_player(path.player_id, body.into_inner())
    {
        Ok(()) => HttpResponse::Ok().json(entry.editor.view()),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Leave edit mode without saving.
#[delete("/api/sessions/{id}/players/{player_id}/edit")]
async fn api_cancel_editing(state: AppState, path: Path<SessionPlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    };
    entry.last_activity = Instant::now();
    entry.editor.cancel_editing_player(path.player_id);
    HttpResponse::Ok().json(entry.editor.view())
}

/// Save a single player's edited fields.
#[post("/api/sessions/{id}/players/{player_id}/save")]
async fn api_save_player(state: AppState, path: Path<SessionPlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    };
    entry.last_activity = Instant::now();
    match entry.editor.save_individual_player(path.player_id) {
        Ok(()) => HttpResponse::Ok().json(entry.editor.view()),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Delete a saved player. Immediate; there is no undo.
#[delete("/api/sessions/{id}/players/{player_id}")]
async fn api_delete_player(state: AppState, path: Path<SessionPlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    };
    entry.last_activity = Instant::now();
    let name = entry
        .editor
        .session()
        .get_player(path.player_id)
        .map(|p| p.display_name());
    match entry.editor.delete_player(path.player_id) {
        Ok(()) => {
            if let Some(name) = name {
                log::info!("Deleted player '{}' from session {}", name, path.id);
            }
            HttpResponse::Ok().json(entry.editor.view())
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<SessionId, SessionEntry>::new()));

    // Background task: every 30 minutes, remove sessions inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive session(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_create_session)
            .service(api_get_session)
            .service(api_add_draft)
            .service(api_update_draft)
            .service(api_remove_draft)
            .service(api_cancel_drafts)
            .service(api_save_drafts)
            .service(api_import_drafts)
            .service(api_start_editing)
            .service(api_update_editing)
            .service(api_cancel_editing)
            .service(api_save_player)
            .service(api_delete_player)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
