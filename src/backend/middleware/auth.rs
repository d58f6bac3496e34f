/**
 * Session Middleware
 *
 * This module provides middleware for the routes that require a live
 * workspace session. It extracts the bearer token from the Authorization
 * header and checks it against the session store.
 */
use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::SessionStore;

/// Session-gate middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Checks it against the session store
/// 3. Passes the request through when the session is live
///
/// Returns 401 Unauthorized if the token is missing, malformed, or not
/// a live session.
pub async fn require_session(
    State(sessions): State<SessionStore>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("[Auth] Missing Authorization header");
            StatusCode::UNAUTHORIZED
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("[Auth] Invalid Authorization header format");
        StatusCode::UNAUTHORIZED
    })?;

    if !sessions.validate(token).await {
        tracing::warn!("[Auth] Rejected request with unknown session token");
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, middleware, routing::get, Router};
    use tower::ServiceExt;

    fn gated_app(sessions: SessionStore) -> Router {
        Router::new()
            .route("/secret", get(|| async { "ok" }))
            .layer(middleware::from_fn_with_state(
                sessions.clone(),
                require_session,
            ))
            .with_state(sessions)
    }

    #[tokio::test]
    async fn test_missing_header_is_unauthorized() {
        let app = gated_app(SessionStore::new());

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/secret")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_unknown_token_is_unauthorized() {
        let app = gated_app(SessionStore::new());

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/secret")
                    .header(AUTHORIZATION, "Bearer not-a-session")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_live_session_passes_through() {
        let sessions = SessionStore::new();
        let token = sessions.create().await;
        let app = gated_app(sessions);

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/secret")
                    .header(AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_is_unauthorized() {
        let sessions = SessionStore::new();
        let token = sessions.create().await;
        let app = gated_app(sessions);

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/secret")
                    .header(AUTHORIZATION, format!("Basic {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
