//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `pricing` - Pure price estimation over fixed Mumbai market tables

pub mod pricing;
