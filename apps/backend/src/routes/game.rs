//! Game HTTP routes: lobby, turns and projections of the live round.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::{PlayerId, RoundStatus, CODE_LENGTH};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{Validate, ValidatedJson};
use crate::services::GuessReply;
use crate::state::app_state::AppState;

const READY_MESSAGE: &str = "marked as ready";
const READY_AND_STARTED_MESSAGE: &str = "marked as ready and game starts!";
const RESULT_PENDING_MESSAGE: &str = "game is not finished yet";

#[derive(Debug, Deserialize)]
pub struct JoinRequest {
    pub name: String,
}

impl Validate for JoinRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_non_blank("name", &self.name)
    }
}

#[derive(Debug, Serialize)]
pub struct JoinResponse {
    pub player_id: PlayerId,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ReadyRequest {
    pub player_id: String,
}

impl Validate for ReadyRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_non_blank("player_id", &self.player_id)
    }
}

#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub round_started: bool,
}

#[derive(Debug, Deserialize)]
pub struct GuessRequest {
    pub player_id: String,
    pub guess: String,
}

impl Validate for GuessRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_non_blank("player_id", &self.player_id)?;
        if self.guess.chars().count() != CODE_LENGTH {
            return Err(AppError::invalid(
                ErrorCode::ValidationError,
                format!("guess must be exactly {CODE_LENGTH} characters"),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: &'static str,
}

fn require_non_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::invalid(
            ErrorCode::ValidationError,
            format!("{field} must not be empty"),
        ));
    }
    Ok(())
}

/// POST /join
async fn join(
    body: ValidatedJson<JoinRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<JoinResponse>, AppError> {
    let player = app_state.engine().add_player(&body.name)?;
    Ok(web::Json(JoinResponse {
        player_id: player.id,
        name: player.name,
    }))
}

/// POST /ready
async fn ready(
    body: ValidatedJson<ReadyRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<ReadyResponse>, AppError> {
    let player_id = PlayerId::from(body.into_inner().player_id);
    let round_started = app_state.engine().mark_ready(&player_id)?;

    let status = if round_started {
        READY_AND_STARTED_MESSAGE
    } else {
        READY_MESSAGE
    };
    Ok(web::Json(ReadyResponse {
        status,
        round_started,
    }))
}

/// POST /guess
///
/// A well-formed guess from the turn holder always returns 200 with the peg
/// counts; a winning guess also ends the round.
async fn guess(
    body: ValidatedJson<GuessRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GuessReply>, AppError> {
    let GuessRequest { player_id, guess } = body.into_inner();
    let reply = app_state
        .engine()
        .process_guess(&PlayerId::from(player_id), &guess)?;
    Ok(web::Json(reply))
}

/// GET /status
async fn status(app_state: web::Data<AppState>) -> web::Json<RoundStatus> {
    web::Json(app_state.engine().status())
}

/// GET /turns
async fn turns(app_state: web::Data<AppState>) -> web::Json<Vec<String>> {
    web::Json(app_state.engine().turn_order())
}

/// GET /result
///
/// 404 with a plain message until a round has been won.
async fn result(app_state: web::Data<AppState>) -> HttpResponse {
    match app_state.engine().result() {
        Some(result) => HttpResponse::Ok().json(result),
        None => HttpResponse::NotFound().json(MessageResponse {
            message: RESULT_PENDING_MESSAGE,
        }),
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/join", web::post().to(join))
        .route("/ready", web::post().to(ready))
        .route("/guess", web::post().to(guess))
        .route("/status", web::get().to(status))
        .route("/turns", web::get().to(turns))
        .route("/result", web::get().to(result));
}
