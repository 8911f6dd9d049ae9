//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types handed to callers
//! - `wire.rs` — Raw serde structs matching backend payloads
//! - `convert.rs` — `From` conversions from wire to domain types
//! - `client.rs` — Sub-client with the HTTP methods for that slice

pub mod order;
pub mod portfolio;
pub mod quote;
