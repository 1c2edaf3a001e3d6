//! Persistence module
//!
//! This module handles the blob store backends and the repositories on top of them.

pub mod blob_store;
pub mod connection;
pub mod repositories;

pub use blob_store::*;
pub use connection::*;
