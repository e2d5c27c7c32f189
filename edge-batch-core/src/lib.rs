//! Edge Batch Core Library
//!
//! Batch orchestration engine for edge-network configuration:
//! - Zone lifecycle (create / delete / export)
//! - DNS record batches (add / delete / proxy toggle)
//! - Zone setting batches (SSL, cache, optimization, bulk security)
//! - Rule copy / delete, email routing, certificate issuance
//!
//! This library is platform-independent: storage and the remote API are
//! abstracted through traits, so any HTTP frontend can drive it and tests
//! can inject mocks.

pub mod acme;
pub mod batch;
pub mod error;
pub mod services;
pub mod tally;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::ServiceContext;
pub use traits::{AccountRepository, AcmeClient, ZoneApiFactory};
