//! 平台抽象 Trait

mod account_repository;
mod acme;
mod api_factory;

pub use account_repository::AccountRepository;
pub use acme::{AcmeClient, CommandOutput};
pub use api_factory::{CloudflareApiFactory, ZoneApiFactory};
