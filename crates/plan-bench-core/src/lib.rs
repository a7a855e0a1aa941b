pub mod error;
pub mod plan;
pub mod types;

#[cfg(feature = "fees")]
pub mod fees;

#[cfg(feature = "benchmark")]
pub mod benchmark;

#[cfg(feature = "services")]
pub mod services;

#[cfg(all(feature = "fees", feature = "benchmark", feature = "services"))]
pub mod analysis;

pub use error::PlanBenchError;
pub use types::*;

/// Standard result type for all plan-bench operations
pub type PlanBenchResult<T> = Result<T, PlanBenchError>;
