//! Database entities.

#![allow(missing_docs)]

pub mod election;
pub mod user;
pub mod vote;
pub mod vote_variant;

pub use election::Entity as Election;
pub use user::Entity as User;
pub use vote::Entity as Vote;
pub use vote_variant::Entity as VoteVariant;
