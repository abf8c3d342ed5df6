//! Reusable UI components.

pub mod post_card;
