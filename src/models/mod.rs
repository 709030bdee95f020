//! Data models representing database entities.

/// Customer account model
pub mod account;
