//! Data Transfer Objects for talking to the prediction service
//!
//! The service accepts a form-encoded flight query and answers with small
//! JSON envelopes keyed on a `status` field. DTOs in this module cover both
//! directions.

pub mod job;
pub mod query;
