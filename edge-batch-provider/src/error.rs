use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all edge API operations.
///
/// The two transport variants ([`Network`](Self::Network) and
/// [`Parse`](Self::Parse)) are deliberately distinct from
/// [`ZoneNotFound`](Self::ZoneNotFound): a pipeline must be able to tell an
/// operator "create the zone first" apart from "check connectivity", so the
/// two are never conflated in outcome messages.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// A network-level failure (connection refused, timeout, body read error).
    #[error("Request failed: {detail}")]
    Network { detail: String },

    /// The response body could not be decoded.
    #[error("Parse error: {detail}")]
    Parse { detail: String },

    /// The zone listing matched nothing for the given domain name.
    #[error("Zone not found")]
    ZoneNotFound { domain: String },

    /// The provider rejected the credentials (HTTP 403).
    #[error("Auth failed (403)")]
    AuthRejected { message: String },

    /// A provider-reported error: the first `errors[].message` from the
    /// response envelope, or `HTTP <status>` when the envelope carried none.
    #[error("{message}")]
    Api { message: String },
}

impl ApiError {
    /// Whether this is expected behavior (bad input, absent resource) rather
    /// than an infrastructure problem, used for log level selection.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::ZoneNotFound { .. } | Self::AuthRejected { .. } | Self::Api { .. }
        )
    }

    /// Whether this is a transport-class failure (network or undecodable
    /// body), as opposed to an answer the provider actually gave.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Parse { .. })
    }
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
