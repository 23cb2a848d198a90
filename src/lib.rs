//! Event Checkout Core - checkout validation and price settlement
//!
//! This crate implements the decision logic that runs between "user submitted
//! checkout" and "payment attempted" for event seat registrations: an ordered,
//! fail-fast pipeline of rule validators plus the financial reconciliation of
//! the submitted charge amount.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
