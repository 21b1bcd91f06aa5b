// ## src/telemetry/mod.rs

//! telemetry/mod.rs
//! Conversion telemetry: counters, stage timers and immutable snapshots.
//!
//! Notes:
//! - Counters are filled while a conversion runs and frozen into a
//!   `TelemetrySnapshot` at the end.
//! - Byte counters follow the envelope layers: container JSON, padding,
//!   and the final `IV || ciphertext` blob.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
