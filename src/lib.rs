//! Two-stage reject bitmaps for hash-recovery workloads.
//!
//! When billions of generated candidates are compared against a large
//! target digest set, almost all of them miss. Eight small bit tables
//! (two stages of four channels, built once over the targets) reject
//! nearly every miss with a few O(1) word probes, so the expensive
//! full comparison only runs for candidates that survive both stages.
//!
//! Build a [`BitmapContext`] over the target [`DigestStore`] once per
//! session and hand it read-only to the comparison backend.

pub mod bitmap;
pub mod digest;
pub mod error;
pub mod hashconfig;
pub mod io_utils;
pub mod options;
pub mod snapshot;
pub mod stats;

pub use bitmap::{populate_channels, BitmapContext, ProbeOutcome, BITMAP_SHIFT1, BITMAP_SHIFT2};
pub use digest::DigestStore;
pub use error::BitsieveError;
pub use hashconfig::HashConfig;
pub use options::{SessionOptions, DEFAULT_BITMAP_MAX, DEFAULT_BITMAP_MIN};
pub use snapshot::BitmapSnapshot;
pub use stats::BitmapStats;
