//! Model status handler

use axum::{extract::State, Json};

use crate::models::ModelInfoResponse;
use crate::{AppError, AppResult, AppState};

pub async fn info(State(state): State<AppState>) -> AppResult<Json<ModelInfoResponse>> {
    let predictor = state.predictor.as_ref().ok_or(AppError::ModelNotLoaded)?;
    Ok(Json(predictor.info()))
}
