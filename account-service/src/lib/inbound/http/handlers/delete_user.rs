use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// `DELETE /users`: remove the authenticated user's account.
///
/// Responds 204 with no body. Tokens for the account keep their signature
/// but stop resolving, so the middleware rejects them from here on.
pub async fn delete_user<R: UserRepository>(
    State(state): State<AppState<R>>,
    auth_user: Option<Extension<AuthenticatedUser>>,
) -> Result<StatusCode, ApiError> {
    let Some(Extension(auth_user)) = auth_user else {
        return Err(ApiError::Unauthorized("Not Authorized".to_string()));
    };

    state
        .user_service
        .delete_user(&auth_user.user.id)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
