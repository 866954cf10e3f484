use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::about_me::about_me;
use super::handlers::all_users::all_users;
use super::handlers::delete_user::delete_user;
use super::handlers::index::index;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::single_user::single_user;
use super::handlers::update_user::update_user;
use super::middleware::authenticate;
use crate::domain::user::service::UserService;
use crate::user::ports::UserRepository;

/// Shared request-handling state.
///
/// Generic over the repository so the full HTTP stack can be exercised
/// against any user directory implementation.
pub struct AppState<R: UserRepository> {
    pub user_service: Arc<UserService<R>>,
    pub authenticator: Arc<Authenticator>,
    pub jwt_expiration_hours: i64,
}

impl<R: UserRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            authenticator: Arc::clone(&self.authenticator),
            jwt_expiration_hours: self.jwt_expiration_hours,
        }
    }
}

pub fn create_router<R: UserRepository>(
    user_service: Arc<UserService<R>>,
    authenticator: Arc<Authenticator>,
    jwt_expiration_hours: i64,
) -> Router {
    let state = AppState {
        user_service,
        authenticator,
        jwt_expiration_hours,
    };

    let public_routes = Router::new()
        .route("/", get(index))
        .route("/register", post(register::<R>))
        .route("/login", post(login::<R>));

    let protected_routes = Router::new()
        .route("/aboutMe", get(about_me::<R>))
        .route("/allUsers", get(all_users::<R>))
        .route("/single-user", get(single_user::<R>))
        .route("/users", put(update_user::<R>).delete(delete_user::<R>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            authenticate::<R>,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
