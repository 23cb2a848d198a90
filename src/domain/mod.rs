//! Domain layer: value objects, aggregates, and the pricing computation.

pub mod checkout;
pub mod foundation;
