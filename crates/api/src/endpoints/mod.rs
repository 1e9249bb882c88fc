//! API endpoints.

mod elections;
mod users;
mod vote_variants;
mod votes;

use axum::Router;

use crate::state::AppState;

/// Create the API router.
///
/// The server nests this under the `/golos` prefix.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/elections", elections::router())
        .nest("/vote_variants", vote_variants::router())
        .nest("/votes", votes::router())
}
