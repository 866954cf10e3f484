use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;

pub async fn index() -> ApiSuccess<IndexResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        IndexResponseData {
            message: "This works.".to_string(),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexResponseData {
    pub message: String,
}
