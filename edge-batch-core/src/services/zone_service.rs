//! Zone 生命周期服务（批量创建 / 删除 / 导出）

use std::sync::Arc;

use edge_batch_provider::ApiError;

use crate::batch::run_batch;
use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::{BatchOutcome, ZoneBatchRequest, ZoneCreateOutcome, ZoneExportRow};

const EXPORT_PAGE_SIZE: u32 = 50;

/// Zone 生命周期服务
pub struct ZoneService {
    ctx: Arc<ServiceContext>,
}

impl ZoneService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 批量创建 zone，成功时返回分配的 name server
    pub async fn batch_create(&self, req: ZoneBatchRequest) -> CoreResult<Vec<ZoneCreateOutcome>> {
        let api = self.ctx.get_api(&req.account_id).await?;

        Ok(run_batch(req.domains, |domain| {
            let api = api.clone();
            async move {
                match api.create_zone(&domain).await {
                    Ok(zone) => ZoneCreateOutcome {
                        domain,
                        success: true,
                        message: "Success".to_string(),
                        name_servers: Some(zone.name_servers),
                    },
                    Err(e) => ZoneCreateOutcome {
                        domain,
                        success: false,
                        message: e.to_string(),
                        name_servers: None,
                    },
                }
            }
        })
        .await)
    }

    /// 批量删除 zone（先解析再删除，解析失败即短路）
    pub async fn batch_delete(&self, req: ZoneBatchRequest) -> CoreResult<Vec<BatchOutcome>> {
        let api = self.ctx.get_api(&req.account_id).await?;

        Ok(run_batch(req.domains, |domain| {
            let api = api.clone();
            async move {
                let zone_id = match api.resolve_zone(&domain).await {
                    Ok(id) => id,
                    Err(e) => return BatchOutcome::failure(domain, e.to_string()),
                };

                match api.delete_zone(&zone_id).await {
                    Ok(()) => BatchOutcome::new(domain, true, "Success"),
                    Err(ApiError::Network { .. }) => {
                        BatchOutcome::failure(domain, "Delete request failed")
                    }
                    Err(e) => BatchOutcome::failure(domain, e.to_string()),
                }
            }
        })
        .await)
    }

    /// 导出账户下全部 zone，按 50 条一页翻到最后
    pub async fn export(&self, account_id: &str) -> CoreResult<Vec<ZoneExportRow>> {
        let api = self.ctx.get_api(account_id).await?;

        let mut rows = Vec::new();
        let mut page = 1;
        loop {
            let (zones, total_pages) = api.list_zones_page(page, EXPORT_PAGE_SIZE).await?;
            rows.extend(zones.into_iter().map(|z| ZoneExportRow {
                domain: z.name,
                status: z.status,
                name_servers: z.name_servers,
                created_on: z.created_on,
            }));
            if page >= total_pages {
                break;
            }
            page += 1;
        }

        log::info!("Exported {} zones for account {account_id}", rows.len());
        Ok(rows)
    }
}
