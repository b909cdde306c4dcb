//! Relcut Core - Foundation for the relcut changelog tool
//!
//! This crate provides the error types, configuration, project manifest
//! access and the changelog store abstraction shared by the relcut crates.

pub mod config;
pub mod error;
pub mod manifest;
pub mod store;

pub use error::{RelcutError, Result};
pub use manifest::ProjectManifest;
pub use store::{ChangelogStore, DirStore, MemoryStore};
