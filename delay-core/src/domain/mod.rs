//! Domain types
//!
//! Entities shared by the client library and the CLI. These carry no I/O.

pub mod job;
pub mod prediction;
