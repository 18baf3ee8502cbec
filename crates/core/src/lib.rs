//! Domain types shared by the storage and HTTP layers.
//!
//! This crate has no internal dependencies and performs no I/O.

pub mod error;
pub mod pagination;
pub mod search;
pub mod shipment;
pub mod trace;
pub mod types;
