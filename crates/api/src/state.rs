//! Application state.

use golos_core::{ElectionService, UserService, VoteService, VoteVariantService};

/// Application state shared across all endpoints.
///
/// Holds one service per entity; each service clones cheaply since the
/// repositories share the pooled connection handle.
#[derive(Clone)]
pub struct AppState {
    /// User service.
    pub user_service: UserService,
    /// Election service.
    pub election_service: ElectionService,
    /// Vote variant service.
    pub vote_variant_service: VoteVariantService,
    /// Vote service.
    pub vote_service: VoteService,
}
