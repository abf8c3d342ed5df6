//! Networking modules for the feed HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `fetch` merges headers and owns the network-primitive seam, `api` issues
//! the authenticated calls, and `types` defines the wire schema.

pub mod api;
pub mod fetch;
pub mod types;
