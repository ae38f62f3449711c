/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * Routes are added in a specific order to ensure proper matching:
 * 1. Health check
 * 2. API routes (auth, users)
 * 3. Fallback handler (404)
 *
 * # CORS
 *
 * The browser frontend runs on a different origin than the API, so the
 * router carries a CORS layer restricted to the configured origin. The
 * layer allows credentials because the session travels in a cookie.
 */

use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

use crate::auth::handlers::MessageResponse;
use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// This function sets up all HTTP routes for the application in the
/// following order:
///
/// 1. **Health Check**: Liveness probe
/// 2. **API Routes**: Authentication, profiles, follow graph
/// 3. **Fallback Handler**: 404 errors
///
/// # Arguments
///
/// * `app_state` - Application state containing the stores and services
/// * `cors_origin` - Frontend origin allowed to call the API
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Route Details
///
/// ## Health
///
/// - `GET /health` - Liveness probe
///
/// ## API Routes
///
/// - `POST /api/auth/register` - User registration
/// - `POST /api/auth/login` - User login
/// - `POST /api/auth/logout` - Session teardown
/// - `GET /api/users/{id}/profile` - Read a profile
/// - `POST /api/users/profile/edit` - Edit the caller's profile
/// - `GET /api/users/suggested` - Accounts the caller might follow
/// - `POST /api/users/{id}/follow` - Toggle a follow edge
///
/// ## Fallback
///
/// The fallback handler returns a JSON 404 envelope for unknown routes.
pub fn create_router(app_state: AppState, cors_origin: &str) -> Router {
    // Start with the health check
    let router = Router::new().route("/health", axum::routing::get(health));

    // Add API routes
    let router = configure_api_routes(router, &app_state);

    // Add the CORS layer when the configured origin parses
    let router = match cors_layer(cors_origin) {
        Some(cors) => router.layer(cors),
        None => router,
    };

    // Fallback handler for 404
    let router = router.fallback(not_found);

    // Use AppState as router state
    router.with_state(app_state)
}

/// Health check handler
///
/// Returns a small JSON acknowledgement so load balancers and deploy
/// scripts can probe the server without touching the database.
async fn health() -> Json<MessageResponse> {
    Json(MessageResponse::ok("xfgram backend is running"))
}

/// Fallback handler for unknown routes
///
/// Answers with the same JSON envelope the error type produces, so
/// clients can always parse `message` and `success`.
async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    let body = serde_json::json!({
        "message": "Route not found",
        "success": false,
    });
    (StatusCode::NOT_FOUND, Json(body))
}

/// Build the CORS layer for the configured frontend origin
///
/// Returns `None` when the origin is not a valid header value, in which
/// case the router runs without CORS and browsers on other origins are
/// rejected by their own same-origin policy.
fn cors_layer(origin: &str) -> Option<CorsLayer> {
    match origin.parse::<HeaderValue>() {
        Ok(origin) => Some(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
                .allow_credentials(true),
        ),
        Err(_) => {
            tracing::warn!("Invalid CORS origin {:?}, continuing without CORS", origin);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_accepts_valid_origin() {
        assert!(cors_layer("http://localhost:5173").is_some());
    }

    #[test]
    fn test_cors_layer_rejects_unparseable_origin() {
        assert!(cors_layer("http://bad origin\n").is_none());
    }
}
