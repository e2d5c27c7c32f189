//! JSON 文件账户仓库
//!
//! accounts.json 写穿持久化。变更时整体回写，批处理期间共享读。

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::RwLock;

use edge_batch_core::types::Account;
use edge_batch_core::{AccountRepository, CoreError, CoreResult};

/// JSON 文件账户仓库
pub struct JsonFileAccountRepository {
    path: PathBuf,
    accounts: RwLock<Vec<Account>>,
}

impl JsonFileAccountRepository {
    /// 打开仓库并载入现有数据，文件不存在时从空列表开始
    pub async fn open(path: impl Into<PathBuf>) -> CoreResult<Self> {
        let path = path.into();
        let accounts = match tokio::fs::read(&path).await {
            Ok(raw) => serde_json::from_slice(&raw)
                .map_err(|e| CoreError::SerializationError(e.to_string()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(CoreError::StorageError(e.to_string())),
        };

        Ok(Self {
            path,
            accounts: RwLock::new(accounts),
        })
    }

    /// 把当前列表整体写回磁盘
    async fn persist(&self, accounts: &[Account]) -> CoreResult<()> {
        let data = serde_json::to_vec_pretty(accounts)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        tokio::fs::write(&self.path, data)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))
    }
}

#[async_trait]
impl AccountRepository for JsonFileAccountRepository {
    async fn find_all(&self) -> CoreResult<Vec<Account>> {
        Ok(self.accounts.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> CoreResult<Option<Account>> {
        Ok(self
            .accounts
            .read()
            .await
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn save(&self, account: &Account) -> CoreResult<()> {
        let mut accounts = self.accounts.write().await;
        match accounts.iter_mut().find(|a| a.id == account.id) {
            Some(existing) => *existing = account.clone(),
            None => accounts.push(account.clone()),
        }
        self.persist(&accounts).await
    }

    async fn delete(&self, id: &str) -> CoreResult<()> {
        let mut accounts = self.accounts.write().await;
        accounts.retain(|a| a.id != id);
        self.persist(&accounts).await
    }
}
