//! Shared types and domain rules for the Fertilizer Advisory Service
//!
//! This crate contains the soil-nutrient reference data, weather snapshot
//! model, fertilizer decision rules, and the advisory message renderer.
//! It is free of HTTP and I/O concerns so the decision logic can be unit
//! tested without spinning up the server.

pub mod advisory;
pub mod models;
pub mod validation;

pub use advisory::*;
pub use models::*;
pub use validation::*;
