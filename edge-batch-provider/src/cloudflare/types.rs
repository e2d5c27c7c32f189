//! Cloudflare API 类型定义

use serde::Deserialize;

/// Cloudflare API 通用响应信封
#[derive(Debug, Deserialize)]
pub struct CfResponse<T> {
    pub success: bool,
    pub result: Option<T>,
    pub errors: Option<Vec<CfError>>,
    pub result_info: Option<CfResultInfo>,
}

#[derive(Debug, Deserialize)]
pub struct CfError {
    #[allow(dead_code)]
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct CfResultInfo {
    #[allow(dead_code)]
    pub page: u32,
    pub total_pages: u32,
}

/// Cloudflare Zone 结构
#[derive(Debug, Deserialize)]
pub struct CfZone {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub name_servers: Vec<String>,
    #[serde(default)]
    pub created_on: String,
}
