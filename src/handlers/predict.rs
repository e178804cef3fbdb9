//! Batch prediction handler

use axum::{extract::State, Json};
use uuid::Uuid;

use crate::models::{PredictionResponse, RecognitionEvent};
use crate::{AppError, AppResult, AppState};

/// Predict a batch of recognition events.
///
/// Items are processed sequentially on the blocking pool; the response has
/// the same length and order as the request.
pub async fn predict_batch(
    State(state): State<AppState>,
    Json(items): Json<Vec<RecognitionEvent>>,
) -> AppResult<Json<Vec<PredictionResponse>>> {
    let predictor = state.predictor.clone().ok_or(AppError::ModelNotLoaded)?;

    if items.len() > state.config.max_batch_size {
        return Err(AppError::ValidationError(format!(
            "Batch of {} items exceeds limit of {}",
            items.len(),
            state.config.max_batch_size
        )));
    }

    let batch_id = Uuid::new_v4();
    let span = tracing::info_span!("predict_batch", %batch_id, size = items.len());

    let results = tokio::task::spawn_blocking(move || {
        let _entered = span.enter();
        predictor.predict_batch(&items)
    })
    .await?;

    let failed = results.iter().filter(|r| r.prediction_proba.is_empty()).count();
    tracing::debug!(%batch_id, "Batch done: {} items, {} failed", results.len(), failed);

    Ok(Json(results))
}
