//! Cloudflare ZoneApi trait 实现

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::{ApiError, Result};
use crate::traits::ZoneApi;
use crate::types::{CreatedZone, NewRecord, RecordFilter, RuleKind, ZoneRecord, ZoneSummary};
use crate::JsonMap;

use super::{CfZone, CloudflareClient, EXPORT_PAGE_SIZE};

impl CloudflareClient {
    fn zone_to_summary(zone: CfZone) -> ZoneSummary {
        ZoneSummary {
            id: zone.id,
            name: zone.name,
            status: zone.status,
            name_servers: zone.name_servers,
            created_on: zone.created_on,
        }
    }
}

#[async_trait]
impl ZoneApi for CloudflareClient {
    async fn verify_credentials(&self) -> Result<()> {
        self.get::<Vec<CfZone>>("/zones?per_page=1").await?;
        Ok(())
    }

    async fn resolve_zone(&self, domain: &str) -> Result<String> {
        if domain.is_empty() {
            return Err(ApiError::Api {
                message: "Domain must not be empty".to_string(),
            });
        }

        // 精确名称匹配，不做通配或后缀匹配
        let zones: Vec<CfZone> = self
            .get(&format!("/zones?name={}", urlencoding::encode(domain)))
            .await?;

        zones
            .into_iter()
            .next()
            .map(|z| z.id)
            .ok_or_else(|| ApiError::ZoneNotFound {
                domain: domain.to_string(),
            })
    }

    async fn create_zone(&self, domain: &str) -> Result<CreatedZone> {
        #[derive(Serialize)]
        struct CreateZoneBody<'a> {
            name: &'a str,
            jump_start: bool,
        }

        let zone: CfZone = self
            .send_json(
                Method::POST,
                "/zones",
                &CreateZoneBody {
                    name: domain,
                    jump_start: true,
                },
            )
            .await?;

        Ok(CreatedZone {
            id: zone.id,
            name_servers: zone.name_servers,
        })
    }

    async fn delete_zone(&self, zone_id: &str) -> Result<()> {
        self.delete(&format!("/zones/{zone_id}")).await
    }

    async fn list_zones_page(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<(Vec<ZoneSummary>, u32)> {
        let (zones, total_pages): (Vec<CfZone>, u32) = self
            .get_page(&format!(
                "/zones?page={page}&per_page={}",
                per_page.min(EXPORT_PAGE_SIZE)
            ))
            .await?;

        Ok((
            zones.into_iter().map(Self::zone_to_summary).collect(),
            total_pages,
        ))
    }

    async fn apply_setting(&self, zone_id: &str, key: &str, value: &Value) -> bool {
        let result: Result<Value> = self
            .send_json(
                Method::PATCH,
                &format!("/zones/{zone_id}/settings/{key}"),
                &json!({ "value": value }),
            )
            .await;

        if let Err(ref e) = result {
            log::debug!("Setting {key} update failed for zone {zone_id}: {e}");
        }
        result.is_ok()
    }

    async fn purge_cache(&self, zone_id: &str) -> bool {
        let result: Result<Value> = self
            .send_json(
                Method::POST,
                &format!("/zones/{zone_id}/purge_cache"),
                &json!({ "purge_everything": true }),
            )
            .await;
        result.is_ok()
    }

    async fn list_records(&self, zone_id: &str, filter: &RecordFilter) -> Result<Vec<ZoneRecord>> {
        self.get(&format!(
            "/zones/{zone_id}/dns_records{}",
            filter.query_string()
        ))
        .await
    }

    async fn create_record(&self, zone_id: &str, record: &NewRecord) -> Result<()> {
        let _: Value = self
            .send_json(Method::POST, &format!("/zones/{zone_id}/dns_records"), record)
            .await?;
        Ok(())
    }

    async fn delete_record(&self, zone_id: &str, record_id: &str) -> bool {
        self.delete(&format!("/zones/{zone_id}/dns_records/{record_id}"))
            .await
            .is_ok()
    }

    async fn set_record_proxied(&self, zone_id: &str, record_id: &str, proxied: bool) -> bool {
        let result: Result<Value> = self
            .send_json(
                Method::PATCH,
                &format!("/zones/{zone_id}/dns_records/{record_id}"),
                &json!({ "proxied": proxied }),
            )
            .await;
        result.is_ok()
    }

    async fn list_rules(&self, zone_id: &str, kind: RuleKind) -> Result<Vec<JsonMap>> {
        self.get(&format!("/zones/{zone_id}/{}", kind.endpoint()))
            .await
    }

    async fn create_rule(&self, zone_id: &str, kind: RuleKind, rule: &JsonMap) -> bool {
        let result: Result<Value> = self
            .send_json(
                Method::POST,
                &format!("/zones/{zone_id}/{}", kind.endpoint()),
                rule,
            )
            .await;
        result.is_ok()
    }

    async fn delete_rule(&self, zone_id: &str, kind: RuleKind, rule_id: &str) -> bool {
        self.delete(&format!("/zones/{zone_id}/{}/{rule_id}", kind.endpoint()))
            .await
            .is_ok()
    }

    async fn enable_email_routing(&self, zone_id: &str) -> Result<()> {
        self.post_empty(&format!("/zones/{zone_id}/email/routing/dns"))
            .await
    }

    async fn set_catch_all_worker(&self, zone_id: &str, worker: &str) -> Result<()> {
        let body = json!({
            "matchers": [{ "type": "all" }],
            "actions": [{ "type": "worker", "value": [worker] }],
            "enabled": true,
        });
        let _: Value = self
            .send_json(
                Method::PUT,
                &format!("/zones/{zone_id}/email/routing/rules/catch_all"),
                &body,
            )
            .await?;
        Ok(())
    }
}
