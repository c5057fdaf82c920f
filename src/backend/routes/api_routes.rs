/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Players
 * - `POST /api/login` - Login or register by phone number
 *
 * ## Leaderboard
 * - `POST /api/leaderboard/record` - Record the player's single result
 * - `GET /api/leaderboard` - Top winners, fastest first
 *
 * ## Admin
 * - `GET /api/admin/credentials` - Every identity, by name
 * - `GET /api/admin/leaderboard` - Every attempt, most recent first
 *
 * No route requires authentication, admin routes included.
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::leaderboard::{leaderboard, list_all_attempts, record_result};
use crate::backend::players::{list_credentials, login};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Player endpoints
        .route("/api/login", post(login))
        // Leaderboard endpoints
        .route("/api/leaderboard", get(leaderboard))
        .route("/api/leaderboard/record", post(record_result))
        // Admin endpoints
        .route("/api/admin/credentials", get(list_credentials))
        .route("/api/admin/leaderboard", get(list_all_attempts))
}
