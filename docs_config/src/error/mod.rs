//! Error types produced while composing and resolving configuration layers.

mod aggregate;
mod constructors;
mod conversions;
mod types;

pub use aggregate::AggregatedErrors;
pub use types::DocsError;
