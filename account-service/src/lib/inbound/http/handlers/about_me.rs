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

/// `GET /aboutMe`: profile of the authenticated user.
pub async fn about_me<R: UserRepository>(
    State(state): State<AppState<R>>,
    auth_user: Option<Extension<AuthenticatedUser>>,
) -> Result<ApiSuccess<AboutMeResponseData>, ApiError> {
    // The middleware lets anonymous requests through; reject them here.
    let Some(Extension(auth_user)) = auth_user else {
        return Err(ApiError::Unauthorized("Not Authorized".to_string()));
    };

    state
        .user_service
        .get_user(&auth_user.user.id)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutMeResponseData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<&User> for AboutMeResponseData {
    fn from(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.as_str().to_string(),
        }
    }
}
