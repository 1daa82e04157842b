// src/conn.rs
//! Constructs Redis client handles for the fixed cache endpoint.

use log::debug;
use redis::{Client, RedisResult};

/// Host of the cache server. Fixed for the lifetime of the process.
pub const HOST: &str = "172.17.50.8";

/// Port of the cache server.
pub const PORT: u16 = 6379;

/// Creates a new Redis client bound to `HOST:PORT`.
///
/// Each call returns a fresh, independent handle; no reference is kept
/// here. The client is lazy: no TCP connection is made until a
/// connection is requested or a command is issued on it, so any
/// resolution or connection failure surfaces on first use, not here.
/// Construction errors from the `redis` crate pass through unmodified.
///
/// The caller owns the returned handle and its connections; both are
/// released on drop.
pub fn create() -> RedisResult<Client> {
    let redis_url = format!("redis://{}:{}/", HOST, PORT);
    debug!("Opening Redis client for URL: {}", redis_url);
    Client::open(redis_url)
}
