//! DNS 记录批量服务（解析添加 / 删除 / 代理切换）

use std::sync::Arc;

use edge_batch_provider::{NewRecord, RecordFilter, ZoneApi};

use crate::batch::run_batch;
use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{
    CountedOutcome, DnsAddRequest, DnsDeleteRequest, ProxyToggleRequest, RecordOutcome,
};

/// 一行解析出的 DNS 记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord {
    pub domain: String,
    pub host: String,
    pub record_type: String,
    pub value: String,
}

/// 解析 `domain|host|type|value` 行，字段不足 4 个的行静默丢弃
#[must_use]
pub fn parse_records(lines: &[String]) -> Vec<ParsedRecord> {
    lines
        .iter()
        .filter_map(|line| {
            let parts: Vec<&str> = line.split('|').collect();
            if parts.len() < 4 {
                return None;
            }
            Some(ParsedRecord {
                domain: parts[0].trim().to_string(),
                host: parts[1].trim().to_string(),
                record_type: parts[2].trim().to_string(),
                value: parts[3].trim().to_string(),
            })
        })
        .collect()
}

/// DNS 记录批量服务
pub struct DnsService {
    ctx: Arc<ServiceContext>,
}

impl DnsService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 批量解析并添加记录：扇出单位是记录而非域名
    pub async fn batch_add(&self, req: DnsAddRequest) -> CoreResult<Vec<RecordOutcome>> {
        let api = self.ctx.get_api(&req.account_id).await?;

        let records = parse_records(&req.records);
        if records.is_empty() {
            return Err(CoreError::ValidationError("No valid records".to_string()));
        }

        // 供应商约定：ttl 0 表示自动，写入时换成 1
        let ttl = if req.ttl == 0 { 1 } else { req.ttl };
        let proxied = req.proxied;
        let delete_old = req.delete_old;

        Ok(run_batch(records, |record| {
            let api = api.clone();
            async move {
                let (success, message) =
                    Self::add_one(&api, &record, ttl, proxied, delete_old).await;
                RecordOutcome {
                    domain: record.domain,
                    host: record.host,
                    record_type: record.record_type,
                    value: record.value,
                    success,
                    message,
                }
            }
        })
        .await)
    }

    async fn add_one(
        api: &Arc<dyn ZoneApi>,
        record: &ParsedRecord,
        ttl: u32,
        proxied: bool,
        delete_old: bool,
    ) -> (bool, String) {
        let zone_id = match api.resolve_zone(&record.domain).await {
            Ok(id) => id,
            Err(e) => return (false, e.to_string()),
        };

        if delete_old {
            Self::delete_existing(api, &zone_id, &record.host, &record.record_type).await;
        }

        let new_record = NewRecord {
            record_type: record.record_type.clone(),
            name: record.host.clone(),
            content: record.value.clone(),
            ttl,
            proxied,
        };

        match api.create_record(&zone_id, &new_record).await {
            Ok(()) => (true, "Success".to_string()),
            Err(e) => (false, e.to_string()),
        }
    }

    /// 删除同名同类型的旧记录，失败静默（尽力而为）
    async fn delete_existing(api: &Arc<dyn ZoneApi>, zone_id: &str, host: &str, record_type: &str) {
        let filter = RecordFilter {
            record_type: Some(record_type.to_string()),
            name: Some(host.to_string()),
        };
        let Ok(records) = api.list_records(zone_id, &filter).await else {
            return;
        };
        for record in records {
            api.delete_record(zone_id, &record.id).await;
        }
    }

    /// 按过滤条件批量删除记录
    pub async fn batch_delete(&self, req: DnsDeleteRequest) -> CoreResult<Vec<CountedOutcome>> {
        if req.domains.is_empty() {
            return Err(CoreError::ValidationError("No domains provided".to_string()));
        }
        let api = self.ctx.get_api(&req.account_id).await?;

        let filter = if req.delete_all {
            RecordFilter::default()
        } else {
            RecordFilter {
                record_type: (!req.record_type.is_empty()).then(|| req.record_type.clone()),
                name: (!req.host_record.is_empty()).then(|| req.host_record.clone()),
            }
        };

        Ok(run_batch(req.domains, |domain| {
            let api = api.clone();
            let filter = filter.clone();
            async move {
                let zone_id = match api.resolve_zone(&domain).await {
                    Ok(id) => id,
                    Err(e) => return CountedOutcome::failure(domain, e.to_string()),
                };

                let records = match api.list_records(&zone_id, &filter).await {
                    Ok(records) => records,
                    Err(e) => return CountedOutcome::failure(domain, e.to_string()),
                };
                if records.is_empty() {
                    return CountedOutcome::failure(domain, "No records found");
                }

                let mut count = 0;
                for record in &records {
                    if api.delete_record(&zone_id, &record.id).await {
                        count += 1;
                    }
                }

                if count > 0 {
                    CountedOutcome {
                        domain,
                        success: true,
                        message: format!("Deleted {count} records"),
                        count,
                    }
                } else {
                    CountedOutcome::failure(domain, "Failed to delete records")
                }
            }
        })
        .await)
    }

    /// 批量切换代理状态，只有 A / AAAA / CNAME 参与
    pub async fn batch_proxy_toggle(
        &self,
        req: ProxyToggleRequest,
    ) -> CoreResult<Vec<CountedOutcome>> {
        if req.domains.is_empty() {
            return Err(CoreError::ValidationError("No domains provided".to_string()));
        }
        let api = self.ctx.get_api(&req.account_id).await?;

        let filter = RecordFilter {
            record_type: (!req.record_type.is_empty()).then(|| req.record_type.clone()),
            name: (!req.host_record.is_empty()).then(|| req.host_record.clone()),
        };
        let proxy_status = req.proxy_status;

        Ok(run_batch(req.domains, |domain| {
            let api = api.clone();
            let filter = filter.clone();
            async move {
                let zone_id = match api.resolve_zone(&domain).await {
                    Ok(id) => id,
                    Err(e) => return CountedOutcome::failure(domain, e.to_string()),
                };

                let records = match api.list_records(&zone_id, &filter).await {
                    Ok(records) => records,
                    Err(e) => return CountedOutcome::failure(domain, e.to_string()),
                };
                if records.is_empty() {
                    return CountedOutcome::failure(domain, "No records found");
                }

                let mut count = 0;
                for record in &records {
                    if matches!(record.record_type.as_str(), "A" | "AAAA" | "CNAME")
                        && api
                            .set_record_proxied(&zone_id, &record.id, proxy_status)
                            .await
                    {
                        count += 1;
                    }
                }

                if count > 0 {
                    let verb = if proxy_status { "Enabled" } else { "Disabled" };
                    CountedOutcome {
                        domain,
                        success: true,
                        message: format!("{verb} proxy for {count} records"),
                        count,
                    }
                } else {
                    CountedOutcome::failure(domain, "No proxiable records found")
                }
            }
        })
        .await)
    }
}
