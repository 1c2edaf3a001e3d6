//! Store repositories
//!
//! Repositories handle all direct store interactions.

pub mod tracked_user_repo;

pub use tracked_user_repo::TrackedUserRepository;
