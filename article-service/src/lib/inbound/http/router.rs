use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_article::create_article;
use super::handlers::create_user::create_user;
use super::handlers::get_current_user::get_current_user;
use super::handlers::list_articles::list_articles;
use super::handlers::list_users::list_users;
use super::handlers::sign_in::sign_in;
use super::middleware::authenticate as auth_middleware;
use crate::domain::article::ports::ArticleServicePort;
use crate::domain::user::ports::UserServicePort;

/// Shared handler state. Every dependency is injected explicitly; there is
/// no ambient registry. Services are held as trait objects so the binary can
/// wire Postgres-backed implementations and tests can wire their own.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub article_service: Arc<dyn ArticleServicePort>,
    pub authenticator: Arc<Authenticator>,
    pub jwt_expiration_hours: i64,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    article_service: Arc<dyn ArticleServicePort>,
    authenticator: Arc<Authenticator>,
    jwt_expiration_hours: i64,
) -> Router {
    let state = AppState {
        user_service,
        article_service,
        authenticator,
        jwt_expiration_hours,
    };

    let public_routes = Router::new()
        .route("/sign-in", post(sign_in))
        .route("/users", post(create_user))
        .route("/users", get(list_users))
        .route("/articles", get(list_articles));

    let protected_routes = Router::new()
        .route("/users/me", get(get_current_user))
        .route("/articles", post(create_article))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
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
