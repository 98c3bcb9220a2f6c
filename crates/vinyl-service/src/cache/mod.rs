//! Caching infrastructure for the service layer.
//!
//! A cache abstraction with a Redis implementation. The cache is never the
//! source of truth: callers treat every failure as a miss.

mod cache_interface;
pub mod cache_keys;
mod redis_cache;

pub use cache_interface::{CacheExt, CacheInterface};
pub use redis_cache::RedisCacheService;
