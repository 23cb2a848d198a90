//! Port implementations.
//!
//! Only in-memory adapters live here; persistence-backed adapters belong to
//! the services that embed this crate.

pub mod memory;
