//! Enrichment module - caching state for external data fetchers.

mod fetch_gate;

pub use fetch_gate::DailyFetchGate;
