//! Headcount Dimensioning Engine for contact centers
//!
//! This crate computes required staffing per time interval from volume and
//! handle-time forecast curves using the Erlang-C queueing model, together with
//! occupancy, shrinkage, shift allocation and weekly-rest (DSR) compliance.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
