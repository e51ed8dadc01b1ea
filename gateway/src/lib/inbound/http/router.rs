use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::login::login;
use crate::authentication::ports::AuthenticatorPort;

pub struct AppState<A>
where
    A: AuthenticatorPort,
{
    pub authenticator: Arc<A>,
}

impl<A> Clone for AppState<A>
where
    A: AuthenticatorPort,
{
    fn clone(&self) -> Self {
        Self {
            authenticator: Arc::clone(&self.authenticator),
        }
    }
}

pub fn create_router<A>(authenticator: Arc<A>) -> Router
where
    A: AuthenticatorPort,
{
    let state = AppState { authenticator };

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
        .route("/api/auth/login", post(login::<A>))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
