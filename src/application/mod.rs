//! Orchestration layer: the validation pipeline and the settlement gate.

pub mod context;
pub mod pipeline;
pub mod settlement;
pub mod validators;

pub use context::ValidationContext;
pub use pipeline::{PipelineDependencies, ValidationPipeline};
pub use settlement::{CheckoutAuthorization, SettlementGate};
