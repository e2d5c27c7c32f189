//! 批量接口请求体
//!
//! 字段名与前端 JSON 保持 camelCase。设置类字段为空字符串表示
//! 「本次不动这项设置」。

use serde::Deserialize;

/// 按域名列表执行的通用请求（zone 创建 / 删除）
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneBatchRequest {
    pub account_id: String,
    pub domains: Vec<String>,
}

/// zone 导出请求
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneExportRequest {
    pub account_id: String,
}

/// DNS 批量解析添加
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsAddRequest {
    pub account_id: String,
    /// 每行 `domain|host|type|value`
    pub records: Vec<String>,
    #[serde(default)]
    pub ttl: u32,
    #[serde(default)]
    pub proxied: bool,
    #[serde(default)]
    pub delete_old: bool,
}

/// DNS 批量删除
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsDeleteRequest {
    pub account_id: String,
    pub domains: Vec<String>,
    #[serde(default)]
    pub record_type: String,
    #[serde(default)]
    pub host_record: String,
    #[serde(default)]
    pub delete_all: bool,
}

/// 批量代理状态切换
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyToggleRequest {
    pub account_id: String,
    pub domains: Vec<String>,
    #[serde(default)]
    pub record_type: String,
    #[serde(default)]
    pub host_record: String,
    pub proxy_status: bool,
}

/// SSL 设置批量应用
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SslSettingsRequest {
    pub account_id: String,
    pub domains: Vec<String>,
    #[serde(default)]
    pub ssl_mode: String,
    #[serde(default)]
    pub min_tls_version: String,
    #[serde(default)]
    pub always_use_https: String,
    #[serde(default)]
    pub automatic_https: String,
    #[serde(default)]
    pub opportunistic_enc: String,
}

/// 缓存设置批量应用
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheSettingsRequest {
    pub account_id: String,
    pub domains: Vec<String>,
    #[serde(default)]
    pub purge_cache: bool,
    #[serde(default)]
    pub cache_level: String,
    #[serde(default)]
    pub browser_ttl: String,
    #[serde(default)]
    pub always_online: String,
    #[serde(default)]
    pub development_mode: String,
}

/// 速度优化设置批量应用
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationRequest {
    pub account_id: String,
    pub domains: Vec<String>,
    #[serde(default)]
    pub minify: String,
    #[serde(default)]
    pub brotli: String,
    #[serde(default)]
    pub early_hints: String,
    #[serde(default)]
    pub http2: String,
    #[serde(default)]
    pub http3: String,
    #[serde(default)]
    pub zero_rtt: String,
    #[serde(default)]
    pub ipv6: String,
    #[serde(default)]
    pub web_sockets: String,
    #[serde(default)]
    pub pseudo_ipv4: String,
    #[serde(default)]
    pub rocket_loader: String,
    #[serde(default)]
    pub mirage: String,
    #[serde(default)]
    pub polish: String,
}

/// 安全杂项设置批量应用
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkSettingsRequest {
    pub account_id: String,
    pub domains: Vec<String>,
    #[serde(default)]
    pub security_level: String,
    #[serde(default)]
    pub challenge_passage: String,
    #[serde(default)]
    pub browser_integrity: String,
    #[serde(default)]
    pub hotlink_protection: String,
    #[serde(default)]
    pub email_obfuscation: String,
    #[serde(default)]
    pub server_side_excludes: String,
    #[serde(default)]
    pub waf: String,
    #[serde(default)]
    pub privacy_pass: String,
    #[serde(default)]
    pub automatic_platform: String,
    #[serde(default)]
    pub orange_to_orange: String,
    #[serde(default)]
    pub proxy_read_timeout: String,
    #[serde(default)]
    pub prefetch_preload: String,
    #[serde(default)]
    pub response_buffering: String,
    #[serde(default)]
    pub sort_query_string: String,
    #[serde(default, rename = "trueClientIp")]
    pub true_client_ip: String,
    #[serde(default)]
    pub crawler_hints: String,
}

/// 规则批量复制
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesCopyRequest {
    pub account_id: String,
    pub source_domain: String,
    pub target_domains: Vec<String>,
    /// `page_rules` / `firewall_rules` / `rate_limiting`，未知取值忽略
    #[serde(default)]
    pub rule_types: Vec<String>,
}

/// 规则批量删除
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesDeleteRequest {
    pub account_id: String,
    pub domains: Vec<String>,
    #[serde(default)]
    pub rule_types: Vec<String>,
}

/// 邮件路由批量开通
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailRoutingRequest {
    pub account_id: String,
    pub domains: Vec<String>,
    pub worker: String,
}

/// 证书批量申请
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertRequest {
    pub account_id: String,
    pub domains: Vec<String>,
    #[serde(default)]
    pub include_wildcard: bool,
}
