//! Shared utilities.

pub mod plural;
pub mod text;
