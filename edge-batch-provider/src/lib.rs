//! # edge-batch-provider
//!
//! Cloudflare edge API client library for the edge-batch backend.
//!
//! Exposes the [`ZoneApi`] trait, the seam between the batch orchestration
//! engine and the remote provider, together with the production
//! [`CloudflareClient`] implementation. Everything the engine needs from the
//! provider (zone lookup, zone lifecycle, per-zone settings, DNS records,
//! page/firewall/rate-limit rules, email routing) goes through this trait, so
//! the engine can be tested against in-memory mocks.
//!
//! All calls are authenticated with the two static `X-Auth-Email` /
//! `X-Auth-Key` headers carried from the selected account. No call is ever
//! retried: each remote mutation is attempted exactly once per invocation.

mod cloudflare;
mod common;
mod error;
mod traits;
mod types;

pub use cloudflare::CloudflareClient;
pub use common::{create_http_client, strip_volatile_fields};
pub use error::{ApiError, Result};
pub use traits::ZoneApi;
pub use types::{
    CreatedZone, EdgeCredentials, NewRecord, RecordFilter, RuleKind, ZoneRecord, ZoneSummary,
};

/// Opaque JSON object, used for rule payloads whose shape is owned by the
/// remote provider.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
