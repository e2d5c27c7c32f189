//! 账户管理服务

use std::sync::Arc;

use uuid::Uuid;

use edge_batch_provider::ApiError;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{Account, CredentialTestOutcome};

/// 账户管理服务
pub struct AccountService {
    ctx: Arc<ServiceContext>,
}

impl AccountService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 列出所有账户
    pub async fn list(&self) -> CoreResult<Vec<Account>> {
        self.ctx.account_repository.find_all().await
    }

    /// 保存账户：id 为空时新建并分配 UUID，否则更新已有账户
    pub async fn save(&self, mut account: Account) -> CoreResult<Account> {
        if account.id.is_empty() {
            account.id = Uuid::new_v4().to_string();
        } else if self
            .ctx
            .account_repository
            .find_by_id(&account.id)
            .await?
            .is_none()
        {
            return Err(CoreError::AccountNotFound(account.id));
        }

        self.ctx.account_repository.save(&account).await?;
        log::info!("Account {} saved", account.id);
        Ok(account)
    }

    /// 删除账户
    pub async fn delete(&self, id: &str) -> CoreResult<()> {
        if self.ctx.account_repository.find_by_id(id).await?.is_none() {
            return Err(CoreError::AccountNotFound(id.to_string()));
        }
        self.ctx.account_repository.delete(id).await?;
        log::info!("Account {id} deleted");
        Ok(())
    }

    /// 测试凭证连通性（不要求账户已保存）
    pub async fn test_credentials(&self, account: &Account) -> CredentialTestOutcome {
        let api = self.ctx.api_factory.create(&account.credentials());
        match api.verify_credentials().await {
            Ok(()) => CredentialTestOutcome {
                success: true,
                message: None,
            },
            Err(ApiError::Network { .. }) => CredentialTestOutcome {
                success: false,
                message: Some("无法连接到 API".to_string()),
            },
            Err(e) => CredentialTestOutcome {
                success: false,
                message: Some(format!("校验失败: {e}")),
            },
        }
    }
}
