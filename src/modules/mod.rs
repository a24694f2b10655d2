//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the remote JSON store client and the local durable cache that
//! the synchronization gateway is built on.

pub mod cache;
pub mod remote;
