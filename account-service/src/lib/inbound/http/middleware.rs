use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiErrorData;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Identity resolved by the authentication middleware.
///
/// Attached to request extensions when a valid token was presented. Absent
/// for anonymous requests; protected handlers reject the absence themselves,
/// so a missing identity can never reach domain logic.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
}

/// Token-checking middleware for protected routes.
///
/// Requests without a bearer token pass through anonymously. A presented
/// token must verify and resolve to a live user record, otherwise the
/// request is rejected before any handler runs.
pub async fn authenticate<R: UserRepository>(
    State(state): State<AppState<R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let Some(header) = req.headers().get(http::header::AUTHORIZATION) else {
        return Ok(next.run(req).await);
    };

    let Ok(value) = header.to_str() else {
        return Err(invalid_token_response());
    };

    let token = match value.strip_prefix("Bearer ") {
        Some(token) => token,
        // A bare "Bearer" carries no token; intermediaries may strip the
        // trailing space.
        None if value == "Bearer" => "",
        None => return Err(invalid_token_response()),
    };

    // An empty token counts as no credential at all.
    if token.is_empty() {
        return Ok(next.run(req).await);
    }

    let claims: auth::Claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        invalid_token_response()
    })?;

    let user_id = UserId::from_string(&claims.id).map_err(|e| {
        tracing::warn!(error = %e, "Token carried a malformed user id");
        invalid_token_response()
    })?;

    // A valid token whose user has since been deleted is an invalid token.
    let user = match state.user_service.get_user(&user_id).await {
        Ok(user) => user,
        Err(UserError::NotFound(_)) => return Err(invalid_token_response()),
        Err(e) => return Err(ApiError::from(e).into_response()),
    };

    req.extensions_mut().insert(AuthenticatedUser { user });

    Ok(next.run(req).await)
}

fn invalid_token_response() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ApiErrorData {
            message: "Invalid token. Please login again.".to_string(),
        }),
    )
        .into_response()
}
