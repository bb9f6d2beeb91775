//! Business logic services

pub mod recommendation;
