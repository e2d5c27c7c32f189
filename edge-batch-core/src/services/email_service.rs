//! 邮件路由批量服务

use std::sync::Arc;

use crate::batch::run_batch;
use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::{BatchOutcome, EmailRoutingRequest};

/// 邮件路由批量服务
///
/// 两步流水线：开启路由、设置 catch-all 指向 worker。严格顺序，
/// 第一步失败时不会执行第二步。
pub struct EmailService {
    ctx: Arc<ServiceContext>,
}

impl EmailService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    pub async fn batch_routing(&self, req: EmailRoutingRequest) -> CoreResult<Vec<BatchOutcome>> {
        let api = self.ctx.get_api(&req.account_id).await?;
        let worker = req.worker;

        Ok(run_batch(req.domains, |domain| {
            let api = api.clone();
            let worker = worker.clone();
            async move {
                let zone_id = match api.resolve_zone(&domain).await {
                    Ok(id) => id,
                    Err(e) => return BatchOutcome::failure(domain, e.to_string()),
                };

                if let Err(e) = api.enable_email_routing(&zone_id).await {
                    return BatchOutcome::failure(domain, format!("Enable routing failed: {e}"));
                }

                if let Err(e) = api.set_catch_all_worker(&zone_id, &worker).await {
                    return BatchOutcome::failure(
                        domain,
                        format!("Set catch-all rule failed: {e}"),
                    );
                }

                BatchOutcome::new(domain, true, "Success")
            }
        })
        .await)
    }
}
