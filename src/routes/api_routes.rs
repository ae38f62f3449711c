/**
 * API Route Handlers
 *
 * This module wires the API endpoints to their handlers, including:
 * - Authentication endpoints (register, login, logout)
 * - Account endpoints (profiles, suggestions, follow graph)
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/register` - User registration
 * - `POST /api/auth/login` - User login
 * - `POST /api/auth/logout` - Session teardown
 *
 * ## Accounts
 * - `GET /api/users/{id}/profile` - Read a profile
 * - `POST /api/users/profile/edit` - Edit the caller's profile
 * - `GET /api/users/suggested` - Accounts the caller might follow
 * - `POST /api/users/{id}/follow` - Toggle a follow edge
 */

use axum::Router;

use crate::auth::handlers::{login, logout, register};
use crate::middleware::require_session;
use crate::profiles::{edit_profile, get_profile, suggested_users};
use crate::relationships::follow_or_unfollow;
use crate::server::state::AppState;

/// Configure API routes
///
/// This function adds the following routes to the router:
///
/// ## Authentication Routes
/// - `POST /api/auth/register` - User registration
/// - `POST /api/auth/login` - User login
/// - `POST /api/auth/logout` - Session teardown
///
/// ## Account Routes
/// - `GET /api/users/{id}/profile` - Read a profile (requires session)
/// - `POST /api/users/profile/edit` - Edit the caller's profile (requires session)
/// - `GET /api/users/suggested` - Suggestion list (requires session)
/// - `POST /api/users/{id}/follow` - Toggle a follow edge (requires session)
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `state` - Application state, cloned into the session middleware
///
/// # Returns
///
/// Router with API routes configured
///
/// # Authentication
///
/// Every `/api/users` route passes through `require_session`, which
/// verifies the session token and loads the calling account. The
/// `/api/auth` routes are public: registration and login create sessions,
/// and logout only clears a cookie.
pub fn configure_api_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    // Authentication endpoints (public)
    let router = router
        .route(
            "/api/auth/register",
            axum::routing::post(register),
        )
        .route(
            "/api/auth/login",
            axum::routing::post(login),
        )
        .route(
            "/api/auth/logout",
            axum::routing::post(logout),
        );

    // Account endpoints, all behind the session middleware
    let protected = Router::new()
        .route(
            "/api/users/suggested",
            axum::routing::get(suggested_users),
        )
        .route(
            "/api/users/profile/edit",
            axum::routing::post(edit_profile),
        )
        .route(
            "/api/users/{id}/profile",
            axum::routing::get(get_profile),
        )
        .route(
            "/api/users/{id}/follow",
            axum::routing::post(follow_or_unfollow),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    router.merge(protected)
}
