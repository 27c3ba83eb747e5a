use axum::Json;
use axum::extract::State;
use tracing::{info, instrument};

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::extractors::path::AppPath;
use crate::mapper::map_submission;
use crate::models::pereval::{CreatePerevalRequest, PerevalResponse};
use crate::reconstruct::reconstruct;
use crate::state::AppState;
use crate::store;

#[utoipa::path(
    post,
    path = "/Pereval",
    tag = "Pereval",
    operation_id = "createPereval",
    summary = "Submit a new mountain pass",
    description = "Stores a pass together with its submitter, coordinates, difficulty levels and images in one transaction. Every field of `user`, `coords`, `level` and each image is required; `images` may be empty.",
    request_body = CreatePerevalRequest,
    responses(
        (status = 200, description = "Pass stored", body = PerevalResponse),
        (status = 500, description = "Validation or persistence failure (missing_field, empty_field, zero_value, malformed_body, persistence_error, storage_unavailable)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(title = %payload.title))]
pub async fn create_pereval(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreatePerevalRequest>,
) -> Result<Json<PerevalResponse>, AppError> {
    let mapped = map_submission(
        payload,
        chrono::Utc::now(),
        state.config.mapping.field_policy,
    )
    .inspect_err(|e| tracing::warn!("Rejected submission: {}", e))?;

    let records = store::create_submission(&state.db, mapped).await?;
    info!(
        pereval_id = records.pereval.id,
        images = records.images.len(),
        "Pereval stored"
    );

    Ok(Json(reconstruct(records)?))
}

#[utoipa::path(
    get,
    path = "/pereval_id/{id}",
    tag = "Pereval",
    operation_id = "getPereval",
    summary = "Get a pass by ID",
    description = "Returns the stored pass with its submitter, coordinates, levels and images.",
    params(("id" = i32, Path, description = "Pereval ID")),
    responses(
        (status = 200, description = "Pass details", body = PerevalResponse),
        (status = 404, description = "Pass not found, or the id is not a valid integer (not_found)", body = ErrorBody),
        (status = 500, description = "Stored pass is incomplete (data_integrity_error)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_pereval(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<PerevalResponse>, AppError> {
    let records = store::find_submission(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Pereval not found".into()))?;

    Ok(Json(reconstruct(records)?))
}
