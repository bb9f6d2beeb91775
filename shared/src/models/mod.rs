//! Domain models for the Fertilizer Advisory Service

mod recommendation;
mod soil;
mod weather;

pub use recommendation::*;
pub use soil::*;
pub use weather::*;
