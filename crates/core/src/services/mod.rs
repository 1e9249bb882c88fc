//! Business logic services.

#![allow(missing_docs)]

pub mod election;
pub mod user;
pub mod vote;
pub mod vote_variant;

pub use election::{CreateElectionInput, ElectionService, PatchElectionInput};
pub use user::{
    CreateUserInput, PatchUserInput, UpdateUserInput, UserService, hash_password, verify_password,
};
pub use vote::{CreateVoteInput, PatchVoteInput, UpdateVoteInput, VoteService};
pub use vote_variant::{CreateVoteVariantInput, UpdateVoteVariantInput, VoteVariantService};
