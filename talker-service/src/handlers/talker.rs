use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use service_core::error::AppError;

use crate::{
    models::{NewTalker, Talker},
    utils::{RequireToken, ValidatedJson},
    AppState,
};

pub const TALKER_NOT_FOUND: &str = "Pessoa palestrante não encontrada";

/// Serves the stored records as they are in the data file.
pub async fn list_talkers(State(state): State<AppState>) -> Json<Vec<Value>> {
    Json(state.repository.load_all().await)
}

/// Ids that are not numbers simply match nothing.
pub async fn get_talker(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    tracing::debug!(talker_id = %id, "Fetching talker");

    let talker = match id.parse::<u64>() {
        Ok(id) => state.repository.find_by_id(id).await,
        Err(_) => None,
    };

    talker
        .map(Json)
        .ok_or_else(|| AppError::NotFound(TALKER_NOT_FOUND.to_string()))
}

/// The token guard runs before the body is read, so a bad token wins over a bad body.
pub async fn create_talker(
    State(state): State<AppState>,
    _token: RequireToken,
    ValidatedJson(new_talker): ValidatedJson<NewTalker>,
) -> Result<(StatusCode, Json<Talker>), AppError> {
    let talker = state.repository.create(new_talker).await?;
    Ok((StatusCode::CREATED, Json(talker)))
}
