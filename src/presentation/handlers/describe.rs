use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::presentation::state::AppState;

use super::{bad_request, error_response};

#[derive(Deserialize)]
pub struct DescribeRequest {
    #[serde(default)]
    pub image: String,
}

#[derive(Serialize)]
pub struct DescribeResponse {
    pub description: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn describe_handler(
    State(state): State<AppState>,
    Json(request): Json<DescribeRequest>,
) -> impl IntoResponse {
    if request.image.is_empty() {
        tracing::warn!("Description request with no image payload");
        return bad_request("No image provided").into_response();
    }

    match state.dispatcher.describe_image(&request.image).await {
        Ok(description) => (StatusCode::OK, Json(DescribeResponse { description })).into_response(),
        Err(error) => {
            tracing::error!(error = %error, "Image description failed");
            error_response(&error).into_response()
        }
    }
}
