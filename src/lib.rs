#![doc(test(attr(deny(warnings))))]

//! Billvault keeps bills, warranties, promotional offers and categories in
//! memory and answers the questions a personal-finance dashboard asks of them:
//! what is due soon, what is about to expire, which coupons are still good.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

pub use crate::config::{Config, Windows};
pub use crate::core::RecordManager;
pub use crate::errors::StoreError;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Billvault tracing initialized.");
    });
}
