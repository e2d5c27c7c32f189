//! 共享类型定义

use serde::{Deserialize, Serialize};

/// 账户凭证（X-Auth-Email / X-Auth-Key 头）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeCredentials {
    /// 认证邮箱
    pub email: String,
    /// 认证密钥
    pub api_key: String,
}

impl EdgeCredentials {
    #[must_use]
    pub fn new(email: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            api_key: api_key.into(),
        }
    }
}

/// 新建 zone 的返回结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedZone {
    /// Zone ID
    pub id: String,
    /// 分配的 name server 列表
    #[serde(rename = "nameServers")]
    pub name_servers: Vec<String>,
}

/// Zone 摘要（导出用）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneSummary {
    pub id: String,
    /// 域名
    pub name: String,
    /// 状态（active / pending / ...）
    pub status: String,
    pub name_servers: Vec<String>,
    pub created_on: String,
}

/// DNS 记录（响应）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneRecord {
    pub id: String,
    /// 记录类型（A / AAAA / CNAME / ...）
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,
}

/// 新建 DNS 记录的请求体
#[derive(Debug, Clone, Serialize)]
pub struct NewRecord {
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub content: String,
    pub ttl: u32,
    pub proxied: bool,
}

/// DNS 记录列表过滤条件（type / name 均可选，可组合）
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub record_type: Option<String>,
    pub name: Option<String>,
}

impl RecordFilter {
    /// 生成查询字符串（含前导 `?`；无过滤条件时为空串）
    #[must_use]
    pub fn query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(ref record_type) = self.record_type {
            params.push(format!("type={}", urlencoding::encode(record_type)));
        }
        if let Some(ref name) = self.name {
            params.push(format!("name={}", urlencoding::encode(name)));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// 规则族：每种规则有自己的 list/create/delete 端点对
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleKind {
    #[serde(rename = "page_rules")]
    PageRules,
    #[serde(rename = "firewall_rules")]
    FirewallRules,
    #[serde(rename = "rate_limiting")]
    RateLimiting,
}

impl RuleKind {
    /// zone 下的端点路径片段
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::PageRules => "pagerules",
            Self::FirewallRules => "firewall/rules",
            Self::RateLimiting => "rate_limits",
        }
    }
}
