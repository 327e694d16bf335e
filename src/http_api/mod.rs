use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Local;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::{
    AddWorkDayOutcome, Classification, ExportError, Projection, Schedule, ScheduleSummary, ShiftType, classify,
    export_file_name, export_to_csv_string, parse_date, project,
};

#[derive(Clone)]
pub struct AppState {
    schedule: Arc<RwLock<Schedule>>,
}

impl AppState {
    pub fn new(schedule: Schedule) -> Self {
        Self {
            schedule: Arc::new(RwLock::new(schedule)),
        }
    }

    pub fn with_shared(schedule: Arc<RwLock<Schedule>>) -> Self {
        Self { schedule }
    }

    fn schedule(&self) -> Arc<RwLock<Schedule>> {
        self.schedule.clone()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

#[derive(Debug)]
enum ApiError {
    Conflict(String),
    Invalid(String),
    Internal(String),
}

#[derive(Debug, Deserialize)]
struct AddWorkDayPayload {
    date: String,
    shift_type: String,
}

impl ApiError {
    fn invalid(message: impl Into<String>) -> Self {
        ApiError::Invalid(message.into())
    }

    fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }
}

impl From<ExportError> for ApiError {
    fn from(value: ExportError) -> Self {
        ApiError::Internal(value.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::Conflict(message) => (StatusCode::CONFLICT, "conflict", message),
            ApiError::Invalid(message) => (StatusCode::BAD_REQUEST, "invalid_request", message),
            ApiError::Internal(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message)
            }
        };
        (status, Json(ErrorBody { error, message })).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/schedule", get(get_schedule).delete(reset_schedule))
        .route("/work-days", post(add_work_day))
        .route("/projection", get(get_projection))
        .route("/classify/:date", get(classify_date))
        .route("/summary", get(get_summary))
        .route("/export", get(export_csv))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, schedule: Schedule) -> std::io::Result<()> {
    let state = AppState::new(schedule);
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn get_schedule(State(state): State<AppState>) -> Json<Schedule> {
    let schedule = state.schedule();
    let snapshot = schedule.read().clone();
    Json(snapshot)
}

async fn reset_schedule(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    let schedule = state.schedule();
    {
        let mut guard = schedule.write();
        if !guard.can_reset() {
            return Err(ApiError::conflict("schedule has no work days to reset"));
        }
        guard.reset();
    }
    info!("schedule reset");
    Ok(StatusCode::NO_CONTENT)
}

async fn add_work_day(
    State(state): State<AppState>,
    Json(payload): Json<AddWorkDayPayload>,
) -> Result<(StatusCode, Json<Schedule>), ApiError> {
    let date = parse_date(&payload.date).map_err(|err| ApiError::invalid(err.to_string()))?;
    let shift: ShiftType = payload
        .shift_type
        .parse()
        .map_err(|err: crate::ParseShiftTypeError| ApiError::invalid(err.to_string()))?;

    let schedule = state.schedule();
    let updated = {
        let mut guard = schedule.write();
        match guard.add_work_day(date, shift) {
            AddWorkDayOutcome::Added => guard.clone(),
            AddWorkDayOutcome::Duplicate => {
                return Err(ApiError::conflict(format!(
                    "{date} is already a work day"
                )));
            }
        }
    };
    info!(%date, %shift, "work day added");
    Ok((StatusCode::CREATED, Json(updated)))
}

async fn get_projection(State(state): State<AppState>) -> Json<Projection> {
    let schedule = state.schedule();
    let projection = {
        let guard = schedule.read();
        project(&guard)
    };
    Json(projection)
}

async fn classify_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<Classification>, ApiError> {
    let date = parse_date(&date).map_err(|err| ApiError::invalid(err.to_string()))?;
    let schedule = state.schedule();
    let classification = {
        let guard = schedule.read();
        classify(&guard, date)
    };
    Ok(Json(classification))
}

async fn get_summary(State(state): State<AppState>) -> Json<ScheduleSummary> {
    let schedule = state.schedule();
    let summary = schedule.read().summary();
    Json(summary)
}

async fn export_csv(State(state): State<AppState>) -> Result<Response, ApiError> {
    let schedule = state.schedule();
    let body = {
        let guard = schedule.read();
        export_to_csv_string(&guard)?
    };
    let file_name = export_file_name(Local::now().date_naive());
    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{file_name}\""),
        ),
    ];
    Ok((headers, body).into_response())
}
