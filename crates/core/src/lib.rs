//! Listing quality domain logic for the Cyclear seller dashboard.
//!
//! Everything in this crate is pure: no database, no network, no clock.
//! Callers hand in listing snapshots and get scores back.

pub mod error;
pub mod lqs;
pub mod types;
