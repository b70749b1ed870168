#![deny(missing_docs)]

//! This crate keeps a registry of users in memory.
//!
//! Users are added in bulk and kept in the order they arrived.
//! Ids are not checked for uniqueness.
//!
//! Two questions can be asked of the registry:
//! - Does this username and password belong to a stored user?
//!   The first such user (in insertion order) is returned.
//! - What does the id to user mapping look like?
//!   A fresh snapshot is built for each call, so later additions do not leak into it.
//!
//! The registry is not synchronized.
//! Wrap it in a lock if several threads need to add users.

/// Users and their ids.
pub mod user;

/// The registry itself.
pub mod registry;

/// A collaborator able to delete users elsewhere.
pub mod dao;

/// Seeding a registry from a configuration file.
pub mod config;

/// Possible errors in this library.
pub mod error;

/// Tracing setup.
pub mod logging;

/// The command line interface.
pub mod cli;
