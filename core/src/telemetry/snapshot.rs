// ## src/telemetry/snapshot.rs

//! telemetry/snapshot.rs
//! Immutable summary of one conversion.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::IV_LEN;
use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{Stage, StageTimes, TelemetryTimer};

/// Counters, elapsed time and per-stage timings of a finished conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub categories: u64,
    pub groups: u64,
    pub checklists: u64,
    pub items: u64,
    pub bytes_document: u64,
    pub bytes_plaintext: u64,
    pub bytes_padding: u64,
    pub bytes_container: u64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        Self {
            categories: counters.categories,
            groups: counters.groups,
            checklists: counters.checklists,
            items: counters.items,
            bytes_document: counters.bytes_document,
            bytes_plaintext: counters.bytes_plaintext,
            bytes_padding: counters.bytes_padding,
            bytes_container: counters.bytes_container,
            elapsed: timer.elapsed(),
            stage_times: timer.stage_times.clone(),
        }
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    pub fn has_all_stages(&self, expected: &[Stage]) -> bool {
        self.stage_times.has_all(expected)
    }

    /// Internal consistency:
    /// - a container is exactly `IV + plaintext + padding`
    /// - padding is 1..=16 bytes when a container was produced
    /// - stage times never exceed elapsed time
    pub fn sanity_check(&self) -> bool {
        let container_ok = if self.bytes_container == 0 {
            self.bytes_plaintext == 0 && self.bytes_padding == 0
        } else {
            self.bytes_container == IV_LEN as u64 + self.bytes_plaintext + self.bytes_padding
                && (1..=16).contains(&self.bytes_padding)
        };
        container_ok && self.total_stage_time() <= self.elapsed
    }
}
