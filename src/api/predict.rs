//! Name prediction endpoint handler

use axum::extract::State;
use tracing::{info, warn};

use crate::api::middleware::truncate_for_log;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::classification::validate_name;
use crate::domain::{ClassificationRequest, ClassificationVerdict};

/// Longest slice of a rejected name that goes into the logs
const MAX_LOGGED_NAME_CHARS: usize = 64;

/// POST /predict
pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<ClassificationRequest>,
) -> Result<Json<ClassificationVerdict>, ApiError> {
    let name = validate_name(&request.name, &state.name_rules).map_err(|e| {
        warn!(
            name = %truncate_for_log(&request.name, MAX_LOGGED_NAME_CHARS),
            name_chars = request.name.chars().count(),
            code = e.code().as_str(),
            "Rejected name: {}",
            e
        );
        ApiError::from(e)
    })?;

    info!(name = %name, "Name passed local checks, classifying");

    let verdict = state.classifier.classify(&name).await?;

    Ok(Json(verdict))
}
