//! 业务逻辑服务层

mod account_service;
mod cert_service;
mod dns_service;
mod email_service;
mod rules_service;
mod settings_service;
mod zone_service;

pub use account_service::AccountService;
pub use cert_service::CertService;
pub use dns_service::DnsService;
pub use email_service::EmailService;
pub use rules_service::RulesService;
pub use settings_service::SettingsService;
pub use zone_service::ZoneService;

use std::sync::Arc;

use edge_batch_provider::ZoneApi;

use crate::error::{CoreError, CoreResult};
use crate::traits::{AccountRepository, ZoneApiFactory};
use crate::types::Account;

/// 服务上下文 - 持有所有依赖
///
/// 平台层创建此上下文并注入平台特定的实现。
pub struct ServiceContext {
    /// 账户持久化仓库
    pub account_repository: Arc<dyn AccountRepository>,
    /// Zone API 工厂
    pub api_factory: Arc<dyn ZoneApiFactory>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        account_repository: Arc<dyn AccountRepository>,
        api_factory: Arc<dyn ZoneApiFactory>,
    ) -> Self {
        Self {
            account_repository,
            api_factory,
        }
    }

    /// 根据账户 ID 获取账户，不存在时返回 `AccountNotFound`
    pub async fn get_account(&self, account_id: &str) -> CoreResult<Account> {
        self.account_repository
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| CoreError::AccountNotFound(account_id.to_string()))
    }

    /// 根据账户 ID 获取 Zone API 实例
    ///
    /// 账户查找在任何扇出之前完成，未知账户不会产生远端调用。
    pub async fn get_api(&self, account_id: &str) -> CoreResult<Arc<dyn ZoneApi>> {
        let account = self.get_account(account_id).await?;
        Ok(self.api_factory.create(&account.credentials()))
    }
}
