#![doc(test(attr(deny(warnings))))]

//! Finex Core offers the transaction ledger, aggregation, and budget
//! evaluation primitives that power personal finance tracking frontends.

pub mod config;
pub mod errors;
pub mod export;
pub mod ledger;
pub mod report;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finex Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
