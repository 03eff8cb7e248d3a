//! Domain models driving the display loop.
//!
//! - `quote` — the `Quote` value produced by a data source.
//! - `cache` — bounded per-ticker quote cache with staleness and eviction policy.
//! - `rotator` — dwell-timed rotation through the configured ticker list.

pub mod cache;
pub mod quote;
pub mod rotator;
