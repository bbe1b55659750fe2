//! Flight Delay Core
//!
//! Core types for the flight delay prediction client.
//!
//! This crate contains:
//! - Domain types: job ids, predictions and delay categories
//! - DTOs: the form submitted to the service and the JSON envelopes it answers with

pub mod domain;
pub mod dto;
