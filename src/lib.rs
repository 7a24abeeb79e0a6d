//! stockroom - an inventory ledger with snapshot persistence
//!
//! The record store owns the collection and rewrites one persisted slot
//! after every change; the report engine derives stock statistics from
//! snapshots of it.

pub mod cli;
pub mod config;
pub mod model;
pub mod observability;
pub mod report;
pub mod slot;
pub mod store;
