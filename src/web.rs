use std::sync::Mutex;

use actix_web::{middleware, web, App, HttpRequest, HttpResponse, HttpServer, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::allocation::{allocate_with, normalize_rules, Allocation, Signup, SignupStatus, SlotRule};
use crate::config::AllocatorConfig;
use crate::display::describe_rule;

/// Last computed board, kept in memory only
pub struct Board {
    pub rules: Vec<SlotRule>,
    pub allocation: Allocation,
}

pub struct AppState {
    pub board: Mutex<Option<Board>>,
    pub config: AllocatorConfig,
    pub admin_password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    password: String,
}

#[derive(Deserialize)]
pub struct BoardRequest {
    rules: Vec<SlotRule>,
    signups: Vec<Signup>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardResponse {
    slots: Vec<BoardSlot>,
    alternates: Vec<Signup>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    displaced_locks: Vec<Signup>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSlot {
    index: usize,
    rule: String,
    signup: Option<Signup>,
    is_empty: bool,
}

impl BoardResponse {
    fn from_board(board: &Board) -> Self {
        let slots = board
            .allocation
            .assignment
            .iter()
            .enumerate()
            .map(|(index, signup)| BoardSlot {
                index,
                rule: board.rules.get(index).map(describe_rule).unwrap_or_default(),
                signup: signup.clone(),
                is_empty: signup.is_none(),
            })
            .collect();

        BoardResponse {
            slots,
            alternates: board.allocation.alternates.clone(),
            displaced_locks: board.allocation.displaced_locks.clone(),
        }
    }
}

fn authorized(req: &HttpRequest, state: &AppState) -> bool {
    req.headers()
        .get("X-Admin-Password")
        .and_then(|v| v.to_str().ok())
        .map_or(false, |p| p == state.admin_password)
}

fn lock_poisoned() -> actix_web::Error {
    actix_web::error::ErrorInternalServerError("board state unavailable")
}

// Admin login endpoint
async fn admin_login(req: web::Json<LoginRequest>, state: web::Data<AppState>) -> Result<HttpResponse> {
    if req.password == state.admin_password {
        Ok(HttpResponse::Ok().json(serde_json::json!({"success": true})))
    } else {
        Ok(HttpResponse::Unauthorized().json(serde_json::json!({"success": false, "error": "Invalid password"})))
    }
}

// Recompute the board from a rule/signup snapshot
async fn post_board(
    req: HttpRequest,
    body: web::Json<BoardRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    if !authorized(&req, &state) {
        return Ok(HttpResponse::Unauthorized().json(serde_json::json!({"success": false, "error": "Unauthorized"})));
    }

    let BoardRequest { rules, signups } = body.into_inner();
    let rules = normalize_rules(&rules, state.config.slot_count);

    match allocate_with(&rules, &signups, &state.config) {
        Ok(allocation) => {
            info!(filled = allocation.filled_count(), alternates = allocation.alternates.len(), "board updated");
            let board = Board { rules, allocation };
            let response = BoardResponse::from_board(&board);
            *state.board.lock().map_err(|_| lock_poisoned())? = Some(board);
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            warn!(error = %e, "board rejected");
            Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            })))
        }
    }
}

async fn get_board(state: web::Data<AppState>) -> Result<HttpResponse> {
    let board = state.board.lock().map_err(|_| lock_poisoned())?;
    match board.as_ref() {
        Some(board) => Ok(HttpResponse::Ok().json(BoardResponse::from_board(board))),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({"error": "Board not available"}))),
    }
}

async fn get_signup_status(id: web::Path<String>, state: web::Data<AppState>) -> Result<HttpResponse> {
    let board = state.board.lock().map_err(|_| lock_poisoned())?;
    let status = board
        .as_ref()
        .map_or(SignupStatus::Unallocated, |b| b.allocation.status_of(id.as_str()));
    Ok(HttpResponse::Ok().json(status))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/login", web::post().to(admin_login))
        .route("/api/board", web::post().to(post_board))
        .route("/api/board", web::get().to(get_board))
        .route("/api/signup/{id}/status", web::get().to(get_signup_status));
}

pub fn app_state(config: AllocatorConfig, admin_password: String) -> web::Data<AppState> {
    web::Data::new(AppState {
        board: Mutex::new(None),
        config,
        admin_password,
    })
}

pub async fn start_server(port: u16, admin_password: String, config: AllocatorConfig) -> std::io::Result<()> {
    let state = app_state(config, admin_password);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
