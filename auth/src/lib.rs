//! Authentication building blocks for the account service.
//!
//! - Password hashing (Argon2id)
//! - JWT issuance and verification
//! - A coordinator tying both together for the login flow
//!
//! The service crate defines its own domain types and adapts these
//! implementations; nothing in here touches the network or the database.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("hunter2").unwrap();
//! assert!(hasher.verify("hunter2", &digest).unwrap());
//! assert!(!hasher.verify("wrong", &digest).unwrap());
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let token = handler.encode(&Claims::for_user("user-1", 8)).unwrap();
//! let claims: Claims = handler.decode(&token).unwrap();
//! assert_eq!(claims.id, "user-1");
//! ```
//!
//! ## Login Flow
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Registration: hash the password for storage.
//! let stored_hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify the password and issue a token.
//! let claims = Claims::for_user("user-1", 8);
//! let result = auth.authenticate("password123", &stored_hash, &claims).unwrap();
//!
//! // Every later request: validate the presented token.
//! let decoded: Claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.id, "user-1");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
