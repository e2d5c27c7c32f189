//! 账户持久化抽象 Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::Account;

/// 账户仓库 Trait
///
/// 平台实现：
/// - Actix-Web: `JsonFileAccountRepository`（accounts.json 写穿）
/// - 测试: `MockAccountRepository`
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// 获取所有账户
    async fn find_all(&self) -> CoreResult<Vec<Account>>;

    /// 根据 ID 获取账户
    async fn find_by_id(&self, id: &str) -> CoreResult<Option<Account>>;

    /// 保存账户（新建或更新）
    async fn save(&self, account: &Account) -> CoreResult<()>;

    /// 删除账户
    async fn delete(&self, id: &str) -> CoreResult<()>;
}
