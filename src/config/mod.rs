//! Default query windows and store latency, handed to the record manager by
//! callers.

use serde::{Deserialize, Serialize};

use crate::storage::Latency;

/// Default parameters for the date-windowed queries and the dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Windows {
    pub upcoming_window_days: u32,
    pub expiring_window_days: u32,
    pub urgent_bill_days: u32,
    pub urgent_warranty_days: u32,
    pub urgent_limit: usize,
}

impl Default for Windows {
    fn default() -> Self {
        Self {
            upcoming_window_days: 30,
            expiring_window_days: 30,
            urgent_bill_days: 7,
            urgent_warranty_days: 30,
            urgent_limit: 3,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub windows: Windows,
    #[serde(default)]
    pub latency: Latency,
}

impl Config {
    /// Default windows with every store operation completing immediately.
    pub fn instant() -> Self {
        Self {
            windows: Windows::default(),
            latency: Latency::none(),
        }
    }
}
