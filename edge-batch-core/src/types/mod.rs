//! 类型定义

mod account;
mod outcomes;
mod requests;
mod settings;

pub use account::{Account, CredentialTestOutcome};
pub use outcomes::{
    BatchOutcome, CertOutcome, CountedOutcome, RecordOutcome, ZoneCreateOutcome, ZoneExportRow,
};
pub use requests::{
    BulkSettingsRequest, CacheSettingsRequest, CertRequest, DnsAddRequest, DnsDeleteRequest,
    EmailRoutingRequest, OptimizationRequest, ProxyToggleRequest, RulesCopyRequest,
    RulesDeleteRequest, SslSettingsRequest, ZoneBatchRequest, ZoneExportRequest,
};
pub use settings::{PlanStep, SettingPlan};
