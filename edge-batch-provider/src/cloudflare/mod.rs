//! Cloudflare Zone API 客户端

mod api;
mod http;
mod types;

use reqwest::Client;

use crate::common::create_http_client;
use crate::types::EdgeCredentials;

pub(crate) use types::{CfResponse, CfZone};

pub(crate) const CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";
/// Zones API 单页最大记录数
pub(crate) const EXPORT_PAGE_SIZE: u32 = 50;

/// Cloudflare Zone API 客户端
///
/// 每个客户端绑定一组账户凭证；所有请求携带 `X-Auth-Email` /
/// `X-Auth-Key` 两个静态头。
pub struct CloudflareClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) credentials: EdgeCredentials,
}

impl CloudflareClient {
    #[must_use]
    pub fn new(credentials: EdgeCredentials) -> Self {
        Self {
            client: create_http_client(),
            base_url: CF_API_BASE.to_string(),
            credentials,
        }
    }

    /// 使用自定义 base URL 创建（测试用）
    #[must_use]
    pub fn with_base_url(credentials: EdgeCredentials, base_url: impl Into<String>) -> Self {
        Self {
            client: create_http_client(),
            base_url: base_url.into(),
            credentials,
        }
    }
}
