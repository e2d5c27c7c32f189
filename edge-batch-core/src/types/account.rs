//! 账户相关类型定义

use serde::{Deserialize, Serialize};

use edge_batch_provider::EdgeCredentials;

/// 凭证账户
///
/// 批处理期间账户只读；持久化格式与 `accounts.json` 一一对应。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// 账户 ID (UUID)，新建时为空由服务端分配
    #[serde(default)]
    pub id: String,
    /// 凭证邮箱
    pub email: String,
    /// API 密钥
    pub key: String,
    /// 展示名称
    pub name: String,
}

impl Account {
    /// 提取凭证对
    #[must_use]
    pub fn credentials(&self) -> EdgeCredentials {
        EdgeCredentials::new(&self.email, &self.key)
    }
}

/// 凭证连通性测试结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialTestOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
