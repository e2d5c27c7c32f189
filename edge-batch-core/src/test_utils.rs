//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use edge_batch_provider::{
    ApiError, CreatedZone, EdgeCredentials, JsonMap, NewRecord, RecordFilter, RuleKind, ZoneApi,
    ZoneRecord, ZoneSummary,
};

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::{AccountRepository, AcmeClient, CommandOutput, ZoneApiFactory};
use crate::types::Account;

type ApiResult<T> = std::result::Result<T, ApiError>;

// ===== MockZoneApi =====

/// 可注入延迟与失败的 Zone API mock
#[derive(Default)]
pub struct MockZoneApi {
    zones: RwLock<HashMap<String, String>>,
    resolve_errors: RwLock<HashMap<String, ApiError>>,
    resolve_delays_ms: RwLock<HashMap<String, u64>>,
    resolve_calls: RwLock<Vec<String>>,

    create_zone_errors: RwLock<HashMap<String, ApiError>>,
    deleted_zones: RwLock<Vec<String>>,
    delete_zone_errors: RwLock<HashMap<String, ApiError>>,
    export_pages: RwLock<Vec<Vec<ZoneSummary>>>,

    records: RwLock<HashMap<String, Vec<ZoneRecord>>>,
    created_records: RwLock<Vec<(String, NewRecord)>>,
    create_record_errors: RwLock<HashMap<String, ApiError>>,
    deleted_records: RwLock<Vec<(String, String)>>,
    failing_record_ids: RwLock<HashSet<String>>,
    proxy_calls: RwLock<Vec<(String, String, bool)>>,

    applied_settings: RwLock<Vec<(String, String, Value)>>,
    failing_setting_keys: RwLock<HashSet<String>>,
    purged_zones: RwLock<Vec<String>>,

    rules: RwLock<HashMap<(String, RuleKind), Vec<JsonMap>>>,
    created_rules: RwLock<Vec<(String, RuleKind, JsonMap)>>,
    rejected_rule_markers: RwLock<HashSet<String>>,
    deleted_rules: RwLock<Vec<(String, RuleKind, String)>>,

    email_enable_errors: RwLock<HashMap<String, ApiError>>,
    catch_all_errors: RwLock<HashMap<String, ApiError>>,
    catch_all_calls: RwLock<Vec<(String, String)>>,

    verify_error: RwLock<Option<ApiError>>,
}

impl MockZoneApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_zone(&self, domain: &str, zone_id: &str) {
        self.zones
            .write()
            .await
            .insert(domain.to_string(), zone_id.to_string());
    }

    pub async fn set_resolve_error(&self, domain: &str, err: ApiError) {
        self.resolve_errors
            .write()
            .await
            .insert(domain.to_string(), err);
    }

    pub async fn set_resolve_delay_ms(&self, domain: &str, ms: u64) {
        self.resolve_delays_ms
            .write()
            .await
            .insert(domain.to_string(), ms);
    }

    pub async fn resolve_calls(&self) -> Vec<String> {
        self.resolve_calls.read().await.clone()
    }

    pub async fn set_create_zone_error(&self, domain: &str, err: ApiError) {
        self.create_zone_errors
            .write()
            .await
            .insert(domain.to_string(), err);
    }

    pub async fn deleted_zones(&self) -> Vec<String> {
        self.deleted_zones.read().await.clone()
    }

    pub async fn set_delete_zone_error(&self, zone_id: &str, err: ApiError) {
        self.delete_zone_errors
            .write()
            .await
            .insert(zone_id.to_string(), err);
    }

    pub async fn push_export_page(&self, page: Vec<ZoneSummary>) {
        self.export_pages.write().await.push(page);
    }

    pub async fn add_record(&self, zone_id: &str, record: ZoneRecord) {
        self.records
            .write()
            .await
            .entry(zone_id.to_string())
            .or_default()
            .push(record);
    }

    pub async fn created_records(&self) -> Vec<(String, NewRecord)> {
        self.created_records.read().await.clone()
    }

    pub async fn set_create_record_error(&self, zone_id: &str, err: ApiError) {
        self.create_record_errors
            .write()
            .await
            .insert(zone_id.to_string(), err);
    }

    pub async fn deleted_records(&self) -> Vec<(String, String)> {
        self.deleted_records.read().await.clone()
    }

    pub async fn fail_record_id(&self, record_id: &str) {
        self.failing_record_ids
            .write()
            .await
            .insert(record_id.to_string());
    }

    pub async fn proxy_calls(&self) -> Vec<(String, String, bool)> {
        self.proxy_calls.read().await.clone()
    }

    pub async fn applied_settings(&self) -> Vec<(String, String, Value)> {
        self.applied_settings.read().await.clone()
    }

    pub async fn fail_setting_key(&self, key: &str) {
        self.failing_setting_keys
            .write()
            .await
            .insert(key.to_string());
    }

    pub async fn purged_zones(&self) -> Vec<String> {
        self.purged_zones.read().await.clone()
    }

    pub async fn add_rule(&self, zone_id: &str, kind: RuleKind, rule: JsonMap) {
        self.rules
            .write()
            .await
            .entry((zone_id.to_string(), kind))
            .or_default()
            .push(rule);
    }

    pub async fn created_rules(&self) -> Vec<(String, RuleKind, JsonMap)> {
        self.created_rules.read().await.clone()
    }

    /// 带指定 `marker` 字段的规则 POST 必然失败
    pub async fn reject_rule_marker(&self, marker: &str) {
        self.rejected_rule_markers
            .write()
            .await
            .insert(marker.to_string());
    }

    pub async fn deleted_rules(&self) -> Vec<(String, RuleKind, String)> {
        self.deleted_rules.read().await.clone()
    }

    pub async fn set_email_enable_error(&self, zone_id: &str, err: ApiError) {
        self.email_enable_errors
            .write()
            .await
            .insert(zone_id.to_string(), err);
    }

    pub async fn set_catch_all_error(&self, zone_id: &str, err: ApiError) {
        self.catch_all_errors
            .write()
            .await
            .insert(zone_id.to_string(), err);
    }

    pub async fn catch_all_calls(&self) -> Vec<(String, String)> {
        self.catch_all_calls.read().await.clone()
    }

    pub async fn set_verify_error(&self, err: ApiError) {
        *self.verify_error.write().await = Some(err);
    }
}

#[async_trait]
impl ZoneApi for MockZoneApi {
    async fn verify_credentials(&self) -> ApiResult<()> {
        match self.verify_error.read().await.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn resolve_zone(&self, domain: &str) -> ApiResult<String> {
        self.resolve_calls.write().await.push(domain.to_string());

        let delay = self.resolve_delays_ms.read().await.get(domain).copied();
        if let Some(ms) = delay {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }

        if let Some(err) = self.resolve_errors.read().await.get(domain) {
            return Err(err.clone());
        }

        self.zones
            .read()
            .await
            .get(domain)
            .cloned()
            .ok_or_else(|| ApiError::ZoneNotFound {
                domain: domain.to_string(),
            })
    }

    async fn create_zone(&self, domain: &str) -> ApiResult<CreatedZone> {
        if let Some(err) = self.create_zone_errors.read().await.get(domain) {
            return Err(err.clone());
        }
        Ok(CreatedZone {
            id: format!("zone-{domain}"),
            name_servers: vec!["ns1.mock.net".to_string(), "ns2.mock.net".to_string()],
        })
    }

    async fn delete_zone(&self, zone_id: &str) -> ApiResult<()> {
        if let Some(err) = self.delete_zone_errors.read().await.get(zone_id) {
            return Err(err.clone());
        }
        self.deleted_zones.write().await.push(zone_id.to_string());
        Ok(())
    }

    async fn list_zones_page(
        &self,
        page: u32,
        _per_page: u32,
    ) -> ApiResult<(Vec<ZoneSummary>, u32)> {
        let pages = self.export_pages.read().await;
        if pages.is_empty() {
            return Ok((Vec::new(), 1));
        }
        let idx = page.saturating_sub(1) as usize;
        let zones = pages.get(idx).cloned().unwrap_or_default();
        Ok((zones, u32::try_from(pages.len()).unwrap_or(1)))
    }

    async fn apply_setting(&self, zone_id: &str, key: &str, value: &Value) -> bool {
        self.applied_settings.write().await.push((
            zone_id.to_string(),
            key.to_string(),
            value.clone(),
        ));
        !self.failing_setting_keys.read().await.contains(key)
    }

    async fn purge_cache(&self, zone_id: &str) -> bool {
        self.purged_zones.write().await.push(zone_id.to_string());
        true
    }

    async fn list_records(
        &self,
        zone_id: &str,
        filter: &RecordFilter,
    ) -> ApiResult<Vec<ZoneRecord>> {
        let records = self.records.read().await;
        let all = records.get(zone_id).cloned().unwrap_or_default();
        Ok(all
            .into_iter()
            .filter(|r| {
                filter
                    .record_type
                    .as_ref()
                    .is_none_or(|t| &r.record_type == t)
                    && filter.name.as_ref().is_none_or(|n| &r.name == n)
            })
            .collect())
    }

    async fn create_record(&self, zone_id: &str, record: &NewRecord) -> ApiResult<()> {
        if let Some(err) = self.create_record_errors.read().await.get(zone_id) {
            return Err(err.clone());
        }
        self.created_records
            .write()
            .await
            .push((zone_id.to_string(), record.clone()));
        Ok(())
    }

    async fn delete_record(&self, zone_id: &str, record_id: &str) -> bool {
        if self.failing_record_ids.read().await.contains(record_id) {
            return false;
        }
        self.deleted_records
            .write()
            .await
            .push((zone_id.to_string(), record_id.to_string()));
        true
    }

    async fn set_record_proxied(&self, zone_id: &str, record_id: &str, proxied: bool) -> bool {
        if self.failing_record_ids.read().await.contains(record_id) {
            return false;
        }
        self.proxy_calls.write().await.push((
            zone_id.to_string(),
            record_id.to_string(),
            proxied,
        ));
        true
    }

    async fn list_rules(&self, zone_id: &str, kind: RuleKind) -> ApiResult<Vec<JsonMap>> {
        Ok(self
            .rules
            .read()
            .await
            .get(&(zone_id.to_string(), kind))
            .cloned()
            .unwrap_or_default())
    }

    async fn create_rule(&self, zone_id: &str, kind: RuleKind, rule: &JsonMap) -> bool {
        if let Some(marker) = rule.get("marker").and_then(Value::as_str) {
            if self.rejected_rule_markers.read().await.contains(marker) {
                return false;
            }
        }
        self.created_rules
            .write()
            .await
            .push((zone_id.to_string(), kind, rule.clone()));
        true
    }

    async fn delete_rule(&self, zone_id: &str, kind: RuleKind, rule_id: &str) -> bool {
        self.deleted_rules
            .write()
            .await
            .push((zone_id.to_string(), kind, rule_id.to_string()));
        true
    }

    async fn enable_email_routing(&self, zone_id: &str) -> ApiResult<()> {
        if let Some(err) = self.email_enable_errors.read().await.get(zone_id) {
            return Err(err.clone());
        }
        Ok(())
    }

    async fn set_catch_all_worker(&self, zone_id: &str, worker: &str) -> ApiResult<()> {
        if let Some(err) = self.catch_all_errors.read().await.get(zone_id) {
            return Err(err.clone());
        }
        self.catch_all_calls
            .write()
            .await
            .push((zone_id.to_string(), worker.to_string()));
        Ok(())
    }
}

// ===== MockAccountRepository =====

pub struct MockAccountRepository {
    accounts: RwLock<HashMap<String, Account>>,
    /// 如果 Some，save 时返回此错误（用于测试存储失败路径）
    save_error: RwLock<Option<String>>,
}

impl MockAccountRepository {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            save_error: RwLock::new(None),
        }
    }

    pub async fn set_save_error(&self, err: Option<String>) {
        *self.save_error.write().await = err;
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_all(&self) -> CoreResult<Vec<Account>> {
        Ok(self.accounts.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> CoreResult<Option<Account>> {
        Ok(self.accounts.read().await.get(id).cloned())
    }

    async fn save(&self, account: &Account) -> CoreResult<()> {
        if let Some(ref msg) = *self.save_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        self.accounts
            .write()
            .await
            .insert(account.id.clone(), account.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> CoreResult<()> {
        self.accounts.write().await.remove(id);
        Ok(())
    }
}

// ===== MockApiFactory =====

/// 不管凭证内容，始终返回同一个 mock API
pub struct MockApiFactory {
    api: Arc<MockZoneApi>,
}

impl MockApiFactory {
    pub fn new(api: Arc<MockZoneApi>) -> Self {
        Self { api }
    }
}

impl ZoneApiFactory for MockApiFactory {
    fn create(&self, _credentials: &EdgeCredentials) -> Arc<dyn ZoneApi> {
        self.api.clone()
    }
}

// ===== MockAcmeClient =====

pub struct MockAcmeClient {
    pub installed: bool,
    issue_output: RwLock<CommandOutput>,
    install_output: RwLock<CommandOutput>,
    issue_calls: RwLock<Vec<(String, bool)>>,
    install_calls: RwLock<Vec<(String, bool)>>,
}

impl MockAcmeClient {
    pub fn new() -> Self {
        Self {
            installed: true,
            issue_output: RwLock::new(CommandOutput {
                output: String::new(),
                ok: true,
            }),
            install_output: RwLock::new(CommandOutput {
                output: String::new(),
                ok: true,
            }),
            issue_calls: RwLock::new(Vec::new()),
            install_calls: RwLock::new(Vec::new()),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            installed: false,
            ..Self::new()
        }
    }

    pub async fn set_issue_output(&self, output: &str, ok: bool) {
        *self.issue_output.write().await = CommandOutput {
            output: output.to_string(),
            ok,
        };
    }

    pub async fn set_install_output(&self, output: &str, ok: bool) {
        *self.install_output.write().await = CommandOutput {
            output: output.to_string(),
            ok,
        };
    }

    pub async fn issue_calls(&self) -> Vec<(String, bool)> {
        self.issue_calls.read().await.clone()
    }

    pub async fn install_calls(&self) -> Vec<(String, bool)> {
        self.install_calls.read().await.clone()
    }
}

#[async_trait]
impl AcmeClient for MockAcmeClient {
    async fn available(&self) -> bool {
        self.installed
    }

    async fn issue(
        &self,
        domain: &str,
        wildcard: bool,
        _credentials: &EdgeCredentials,
    ) -> CommandOutput {
        self.issue_calls
            .write()
            .await
            .push((domain.to_string(), wildcard));
        self.issue_output.read().await.clone()
    }

    async fn install(&self, domain: &str, wildcard: bool, _cert_dir: &Path) -> CommandOutput {
        self.install_calls
            .write()
            .await
            .push((domain.to_string(), wildcard));
        self.install_output.read().await.clone()
    }
}

// ===== 工厂方法 =====

/// 创建测试账户
pub fn test_account() -> Account {
    Account {
        id: "acc-1".to_string(),
        email: "ops@example.com".to_string(),
        key: "test-key-12345".to_string(),
        name: "主账户".to_string(),
    }
}

/// 创建测试用 `ServiceContext`，预置一个 `acc-1` 账户
pub async fn create_test_context() -> (
    Arc<ServiceContext>,
    Arc<MockAccountRepository>,
    Arc<MockZoneApi>,
) {
    let account_repo = Arc::new(MockAccountRepository::new());
    let api = Arc::new(MockZoneApi::new());
    let factory = Arc::new(MockApiFactory::new(api.clone()));

    account_repo
        .save(&test_account())
        .await
        .unwrap_or_else(|e| panic!("seed account: {e}"));

    let ctx = Arc::new(ServiceContext::new(account_repo.clone(), factory));
    (ctx, account_repo, api)
}

/// 构造一条测试 DNS 记录
pub fn test_record(id: &str, record_type: &str, name: &str, proxied: bool) -> ZoneRecord {
    ZoneRecord {
        id: id.to_string(),
        record_type: record_type.to_string(),
        name: name.to_string(),
        content: "192.0.2.1".to_string(),
        proxied: Some(proxied),
    }
}
