//! Mumbai Price Estimator - Interactive apartment price estimation
//!
//! This crate estimates Mumbai apartment prices from carpet area, location,
//! floor, building age and amenities using fixed market heuristics, and
//! serves the calculator as a web form and JSON API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
