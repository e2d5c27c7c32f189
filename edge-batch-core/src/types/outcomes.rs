//! 批量接口结果类型
//!
//! 所有结果数组的顺序与请求中的目标顺序一致。

use serde::{Deserialize, Serialize};

/// 通用域名级结果（设置类 / 邮件路由 / zone 删除）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub domain: String,
    pub success: bool,
    pub message: String,
}

impl BatchOutcome {
    #[must_use]
    pub fn new(domain: impl Into<String>, success: bool, message: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn failure(domain: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(domain, false, message)
    }
}

/// zone 创建结果，成功时携带分配的 name server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneCreateOutcome {
    pub domain: String,
    pub success: bool,
    pub message: String,
    #[serde(rename = "nameServers", skip_serializing_if = "Option::is_none")]
    pub name_servers: Option<Vec<String>>,
}

/// 带计数的域名级结果（DNS 删除 / 代理切换 / 规则复制删除）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountedOutcome {
    pub domain: String,
    pub success: bool,
    pub message: String,
    pub count: usize,
}

impl CountedOutcome {
    #[must_use]
    pub fn failure(domain: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            success: false,
            message: message.into(),
            count: 0,
        }
    }
}

/// DNS 添加的记录级结果（扇出单位是记录而非域名）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordOutcome {
    pub domain: String,
    pub host: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub value: String,
    pub success: bool,
    pub message: String,
}

/// 证书申请结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertOutcome {
    pub domain: String,
    pub success: bool,
    pub message: String,
    pub steps: Vec<String>,
    #[serde(rename = "certPath", skip_serializing_if = "Option::is_none")]
    pub cert_path: Option<String>,
    #[serde(rename = "downloadUrl", skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

/// zone 导出行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneExportRow {
    pub domain: String,
    pub status: String,
    #[serde(rename = "nameServers")]
    pub name_servers: Vec<String>,
    #[serde(rename = "createdOn")]
    pub created_on: String,
}
