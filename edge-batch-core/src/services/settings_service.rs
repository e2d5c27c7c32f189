//! Zone 设置批量服务
//!
//! 四个设置族（SSL / 缓存 / 速度优化 / 安全杂项）共用同一条流水线：
//! 解析 zone，按计划执行子操作，计数归类。

use std::sync::Arc;

use edge_batch_provider::ZoneApi;

use crate::batch::run_batch;
use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::tally::SettingTally;
use crate::types::{
    BatchOutcome, BulkSettingsRequest, CacheSettingsRequest, OptimizationRequest, PlanStep,
    SettingPlan, SslSettingsRequest,
};

/// Zone 设置批量服务
pub struct SettingsService {
    ctx: Arc<ServiceContext>,
}

impl SettingsService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// SSL 设置族
    pub async fn batch_ssl(&self, req: SslSettingsRequest) -> CoreResult<Vec<BatchOutcome>> {
        let plan = SettingPlan::from_ssl(&req);
        self.run(&req.account_id, req.domains, plan, "Failed to update settings")
            .await
    }

    /// 缓存设置族（含 purge）
    pub async fn batch_cache(&self, req: CacheSettingsRequest) -> CoreResult<Vec<BatchOutcome>> {
        let plan = SettingPlan::from_cache(&req);
        self.run(&req.account_id, req.domains, plan, "No operations performed")
            .await
    }

    /// 速度优化设置族
    pub async fn batch_optimization(
        &self,
        req: OptimizationRequest,
    ) -> CoreResult<Vec<BatchOutcome>> {
        let plan = SettingPlan::from_optimization(&req);
        self.run(&req.account_id, req.domains, plan, "No operations performed")
            .await
    }

    /// 安全杂项设置族
    pub async fn batch_bulk(&self, req: BulkSettingsRequest) -> CoreResult<Vec<BatchOutcome>> {
        let plan = SettingPlan::from_bulk(&req);
        self.run(&req.account_id, req.domains, plan, "No operations performed")
            .await
    }

    async fn run(
        &self,
        account_id: &str,
        domains: Vec<String>,
        plan: SettingPlan,
        empty_message: &'static str,
    ) -> CoreResult<Vec<BatchOutcome>> {
        let api = self.ctx.get_api(account_id).await?;

        Ok(run_batch(domains, |domain| {
            let api = api.clone();
            let plan = plan.clone();
            async move {
                let zone_id = match api.resolve_zone(&domain).await {
                    Ok(id) => id,
                    Err(e) => return BatchOutcome::failure(domain, e.to_string()),
                };

                let tally = Self::apply_plan(&api, &zone_id, &plan).await;
                let (success, message) = tally.classify(empty_message);
                BatchOutcome::new(domain, success, message)
            }
        })
        .await)
    }

    /// 按计划顺序执行子操作并计数
    async fn apply_plan(api: &Arc<dyn ZoneApi>, zone_id: &str, plan: &SettingPlan) -> SettingTally {
        let mut tally = SettingTally::new();
        for step in plan.steps() {
            let ok = match step {
                PlanStep::Setting { key, value } => api.apply_setting(zone_id, key, value).await,
                PlanStep::PurgeCache => api.purge_cache(zone_id).await,
                PlanStep::Rejected { .. } => false,
            };
            tally.record(ok);
        }
        tally
    }
}
