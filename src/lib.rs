#![doc(test(attr(deny(warnings))))]

//! Taxi Diary keeps an in-memory log of completed taxi rides together with a
//! driver profile and a filtered, sorted review view. The crate exposes the
//! domain core (registry, query engine, screen navigator) as a library; the
//! bundled CLI shell is one possible presentation layer on top of it.

pub mod app;
pub mod cli;
pub mod config;
pub mod driver;
pub mod errors;
pub mod rides;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Taxi Diary tracing initialized.");
    });
}
