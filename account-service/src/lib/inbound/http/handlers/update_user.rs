use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// `PUT /users`: replace the authenticated user's profile.
///
/// All four fields are required; the password is re-hashed on every update.
/// The response carries the updated record without the password hash.
pub async fn update_user<R: UserRepository>(
    State(state): State<AppState<R>>,
    auth_user: Option<Extension<AuthenticatedUser>>,
    Json(body): Json<UpdateUserRequestBody>,
) -> Result<ApiSuccess<UpdateUserResponseData>, ApiError> {
    let Some(Extension(auth_user)) = auth_user else {
        return Err(ApiError::Unauthorized("Not Authorized".to_string()));
    };

    let command = body.try_into_command()?;

    state
        .user_service
        .update_user(&auth_user.user.id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}

/// HTTP request body for updating a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateUserRequestBody {
    email: String,
    first_name: String,
    last_name: String,
    password: String,
}

impl UpdateUserRequestBody {
    fn try_into_command(self) -> Result<UpdateUserCommand, UserError> {
        let email = EmailAddress::new(self.email)?;
        Ok(UpdateUserCommand {
            email,
            first_name: self.first_name,
            last_name: self.last_name,
            password: self.password,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateUserResponseData {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UpdateUserResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.as_str().to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            created_at: user.created_at,
        }
    }
}
