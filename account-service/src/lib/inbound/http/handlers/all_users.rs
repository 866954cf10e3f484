use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::User;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// `GET /allUsers`: every registered profile.
///
/// Password hashes never leave the domain layer; the response type has no
/// field for them.
pub async fn all_users<R: UserRepository>(
    State(state): State<AppState<R>>,
    auth_user: Option<Extension<AuthenticatedUser>>,
) -> Result<ApiSuccess<Vec<UserSummaryData>>, ApiError> {
    if auth_user.is_none() {
        return Err(ApiError::Unauthorized("Not Authorized".to_string()));
    }

    state
        .user_service
        .list_users()
        .await
        .map_err(ApiError::from)
        .map(|users| {
            ApiSuccess::new(
                StatusCode::OK,
                users.iter().map(UserSummaryData::from).collect(),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummaryData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<&User> for UserSummaryData {
    fn from(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.as_str().to_string(),
        }
    }
}
