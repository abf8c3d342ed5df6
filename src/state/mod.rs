//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `token` owns the single persisted session value; `auth` is the
//! UI-facing view of who is signed in.

pub mod auth;
pub mod token;
