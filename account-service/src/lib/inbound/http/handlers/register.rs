use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// `POST /register`: create an account and hand back a signed token.
///
/// Responds 201 with the bare token string, or 400 when the email is
/// malformed or already registered.
pub async fn register<R: UserRepository>(
    State(state): State<AppState<R>>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<ApiSuccess<String>, ApiError> {
    let command = body.try_into_command()?;

    let user = state
        .user_service
        .register_user(command)
        .await
        .map_err(ApiError::from)?;

    let claims = auth::Claims::for_user(user.id, state.jwt_expiration_hours);
    let token = state
        .authenticator
        .generate_token(&claims)
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {}", e)))?;

    Ok(ApiSuccess::new(StatusCode::CREATED, token))
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    email: String,
    first_name: String,
    last_name: String,
    password: String,
}

impl RegisterRequestBody {
    fn try_into_command(self) -> Result<CreateUserCommand, UserError> {
        let email = EmailAddress::new(self.email)?;
        Ok(CreateUserCommand::new(
            email,
            self.first_name,
            self.last_name,
            self.password,
        ))
    }
}
