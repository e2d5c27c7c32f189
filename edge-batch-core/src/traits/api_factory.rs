//! Zone API 实例工厂

use std::sync::Arc;

use edge_batch_provider::{EdgeCredentials, ZoneApi};

/// 把一组凭证变成可用的 [`ZoneApi`] 实例
///
/// 生产实现构造 `CloudflareClient`，测试注入 mock。
pub trait ZoneApiFactory: Send + Sync {
    fn create(&self, credentials: &EdgeCredentials) -> Arc<dyn ZoneApi>;
}

/// 生产工厂：每组凭证一个 Cloudflare 客户端
pub struct CloudflareApiFactory;

impl ZoneApiFactory for CloudflareApiFactory {
    fn create(&self, credentials: &EdgeCredentials) -> Arc<dyn ZoneApi> {
        Arc::new(edge_batch_provider::CloudflareClient::new(
            credentials.clone(),
        ))
    }
}
