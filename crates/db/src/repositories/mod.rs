//! Repositories mapping database rows and errors to domain types.

mod election;
mod user;
mod vote;
mod vote_variant;

pub use election::ElectionRepository;
pub use user::UserRepository;
pub use vote::VoteRepository;
pub use vote_variant::VoteVariantRepository;
