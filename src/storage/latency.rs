use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Artificial per-operation delay, in milliseconds, emulating a remote call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Latency {
    pub get_all_ms: u64,
    pub get_by_id_ms: u64,
    pub create_ms: u64,
    pub update_ms: u64,
    pub delete_ms: u64,
    pub query_ms: u64,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            get_all_ms: 300,
            get_by_id_ms: 250,
            create_ms: 400,
            update_ms: 350,
            delete_ms: 300,
            query_ms: 250,
        }
    }
}

impl Latency {
    /// Completes every operation immediately.
    pub fn none() -> Self {
        Self {
            get_all_ms: 0,
            get_by_id_ms: 0,
            create_ms: 0,
            update_ms: 0,
            delete_ms: 0,
            query_ms: 0,
        }
    }
}

/// Suspends the caller for `ms` milliseconds; a zero delay never yields.
pub(crate) async fn simulate(ms: u64) {
    if ms > 0 {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}
