//! HTTP request handlers

mod health;
mod recommendation;

pub use health::*;
pub use recommendation::*;
