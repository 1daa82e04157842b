// src/lib.rs
//! Factory for Redis client handles bound to the fixed cache endpoint.

pub mod conn;
pub mod utils;

// Re-export the factory surface for easy access
pub use conn::{create, HOST, PORT};
