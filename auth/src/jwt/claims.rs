use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Token payload for an authenticated account.
///
/// The `id` claim carries the user identifier; `exp` and `iat` are Unix
/// timestamps. Tokens are always issued with an expiry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User identifier
    pub id: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Build claims for a user with an expiry `valid_hours` from now.
    pub fn for_user(user_id: impl ToString, valid_hours: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(valid_hours);

        Self {
            id: user_id.to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
        }
    }

    /// Check whether the token is expired at `current_timestamp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
