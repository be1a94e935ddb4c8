//! Background Tasks Module
//!
//! Optional tasks a caller may run next to a cache. The cache never spawns them.
//!
//! # Tasks
//! - Sweeper: purges expired cache entries at a fixed interval

mod sweeper;

pub use sweeper::{spawn_configured_sweeper, spawn_sweeper};
