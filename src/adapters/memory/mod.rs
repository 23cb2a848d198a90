//! In-memory adapters backing every lookup and reservation port.
//!
//! Used by the crate's own tests and by embedders that want a fully wired
//! pipeline without external storage.

mod registry;
mod reservations;

pub use registry::InMemoryRegistry;
pub use reservations::InMemorySeatReservations;
