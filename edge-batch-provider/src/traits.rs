//! Zone API 抽象 Trait

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::types::{CreatedZone, NewRecord, RecordFilter, RuleKind, ZoneRecord, ZoneSummary};
use crate::JsonMap;

/// 边缘网络 Zone API Trait
///
/// 批处理引擎只通过此 trait 访问远端，生产实现为
/// [`CloudflareClient`](crate::CloudflareClient)，测试注入 mock。
///
/// 返回 `bool` 的方法是尽力而为的单次变更：失败不携带原因，只计入
/// 调用方的成功/尝试计数。返回 [`Result`] 的方法的错误会成为该域名
/// 流水线的失败消息。
#[async_trait]
pub trait ZoneApi: Send + Sync {
    /// 校验凭证是否可用（`GET /zones?per_page=1` 是否成功）
    async fn verify_credentials(&self) -> Result<()>;

    /// 按域名精确解析 zone ID
    ///
    /// 只做全名匹配：查询 `example.com` 不会匹配 `www.example.com`。
    /// 零命中返回 [`ApiError::ZoneNotFound`](crate::ApiError::ZoneNotFound)，
    /// 传输失败返回与之可区分的错误。
    async fn resolve_zone(&self, domain: &str) -> Result<String>;

    /// 创建 zone（`jump_start: true`），返回分配的 name server
    async fn create_zone(&self, domain: &str) -> Result<CreatedZone>;

    /// 删除 zone
    async fn delete_zone(&self, zone_id: &str) -> Result<()>;

    /// 按页列出账户下所有 zone，返回 (本页结果, 总页数)
    async fn list_zones_page(&self, page: u32, per_page: u32)
        -> Result<(Vec<ZoneSummary>, u32)>;

    /// 更新单个 zone 设置，成功返回 true
    ///
    /// 一次调用恰好一次远端变更，无本地状态。
    async fn apply_setting(&self, zone_id: &str, key: &str, value: &Value) -> bool;

    /// 清空 zone 缓存（purge everything）
    async fn purge_cache(&self, zone_id: &str) -> bool;

    /// 列出 DNS 记录（type / name 过滤可选）
    async fn list_records(&self, zone_id: &str, filter: &RecordFilter) -> Result<Vec<ZoneRecord>>;

    /// 创建 DNS 记录
    async fn create_record(&self, zone_id: &str, record: &NewRecord) -> Result<()>;

    /// 删除单条 DNS 记录（尽力而为）
    async fn delete_record(&self, zone_id: &str, record_id: &str) -> bool;

    /// 切换单条记录的代理状态（尽力而为）
    async fn set_record_proxied(&self, zone_id: &str, record_id: &str, proxied: bool) -> bool;

    /// 列出某类规则，规则体为不透明 JSON 对象
    async fn list_rules(&self, zone_id: &str, kind: RuleKind) -> Result<Vec<JsonMap>>;

    /// 创建一条规则（调用方需先剥离易变字段）
    async fn create_rule(&self, zone_id: &str, kind: RuleKind, rule: &JsonMap) -> bool;

    /// 删除一条规则（尽力而为）
    async fn delete_rule(&self, zone_id: &str, kind: RuleKind, rule_id: &str) -> bool;

    /// 开启邮件路由（写入路由 DNS 记录）
    async fn enable_email_routing(&self, zone_id: &str) -> Result<()>;

    /// 设置 catch-all 规则指向指定 worker
    async fn set_catch_all_worker(&self, zone_id: &str, worker: &str) -> Result<()>;
}
