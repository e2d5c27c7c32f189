//! 规则批量服务（跨 zone 复制 / 清空）

use std::sync::Arc;

use edge_batch_provider::{strip_volatile_fields, RuleKind, ZoneApi};

use crate::batch::run_batch;
use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{CountedOutcome, RulesCopyRequest, RulesDeleteRequest};

/// 把请求里的规则族名称解析为 [`RuleKind`]，未知名称静默忽略
fn parse_rule_kinds(names: &[String]) -> Vec<RuleKind> {
    names
        .iter()
        .filter_map(|name| match name.as_str() {
            "page_rules" => Some(RuleKind::PageRules),
            "firewall_rules" => Some(RuleKind::FirewallRules),
            "rate_limiting" => Some(RuleKind::RateLimiting),
            _ => None,
        })
        .collect()
}

/// 规则批量服务
pub struct RulesService {
    ctx: Arc<ServiceContext>,
}

impl RulesService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 把源域名的规则复制到所有目标域名
    ///
    /// 源 zone 在扇出之前解析一次；解析失败整个请求失败，
    /// 不会对任何目标产生调用。
    pub async fn batch_copy(&self, req: RulesCopyRequest) -> CoreResult<Vec<CountedOutcome>> {
        let api = self.ctx.get_api(&req.account_id).await?;

        let source_zone_id = api
            .resolve_zone(&req.source_domain)
            .await
            .map_err(|_| CoreError::ValidationError("Source domain not found".to_string()))?;

        let kinds = parse_rule_kinds(&req.rule_types);

        Ok(run_batch(req.target_domains, |domain| {
            let api = api.clone();
            let source_zone_id = source_zone_id.clone();
            let kinds = kinds.clone();
            async move {
                let target_zone_id = match api.resolve_zone(&domain).await {
                    Ok(id) => id,
                    Err(_) => return CountedOutcome::failure(domain, "Target zone not found"),
                };

                let mut total = 0;
                for kind in kinds {
                    total +=
                        Self::copy_kind(&api, &source_zone_id, &target_zone_id, kind).await;
                }

                if total > 0 {
                    CountedOutcome {
                        domain,
                        success: true,
                        message: format!("Copied {total} rules"),
                        count: total,
                    }
                } else {
                    CountedOutcome::failure(domain, "No rules copied")
                }
            }
        })
        .await)
    }

    /// 复制单个规则族，返回成功条数
    async fn copy_kind(
        api: &Arc<dyn ZoneApi>,
        source_zone_id: &str,
        target_zone_id: &str,
        kind: RuleKind,
    ) -> usize {
        let Ok(rules) = api.list_rules(source_zone_id, kind).await else {
            return 0;
        };

        let mut count = 0;
        for mut rule in rules {
            strip_volatile_fields(&mut rule);
            if api.create_rule(target_zone_id, kind, &rule).await {
                count += 1;
            }
        }
        count
    }

    /// 清空各域名的指定规则族
    pub async fn batch_delete(&self, req: RulesDeleteRequest) -> CoreResult<Vec<CountedOutcome>> {
        let api = self.ctx.get_api(&req.account_id).await?;
        let kinds = parse_rule_kinds(&req.rule_types);

        Ok(run_batch(req.domains, |domain| {
            let api = api.clone();
            let kinds = kinds.clone();
            async move {
                let zone_id = match api.resolve_zone(&domain).await {
                    Ok(id) => id,
                    Err(e) => return CountedOutcome::failure(domain, e.to_string()),
                };

                let mut total = 0;
                for kind in kinds {
                    let Ok(rules) = api.list_rules(&zone_id, kind).await else {
                        continue;
                    };
                    for rule in &rules {
                        let Some(id) = rule.get("id").and_then(serde_json::Value::as_str) else {
                            continue;
                        };
                        if api.delete_rule(&zone_id, kind, id).await {
                            total += 1;
                        }
                    }
                }

                if total > 0 {
                    CountedOutcome {
                        domain,
                        success: true,
                        message: format!("Deleted {total} rules"),
                        count: total,
                    }
                } else {
                    CountedOutcome::failure(domain, "No rules found")
                }
            }
        })
        .await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_context;
    use edge_batch_provider::JsonMap;
    use serde_json::json;

    fn rule(marker: &str) -> JsonMap {
        let value = json!({
            "id": format!("rule-{marker}"),
            "created_on": "2024-01-01T00:00:00Z",
            "modified_on": "2024-01-02T00:00:00Z",
            "marker": marker,
            "priority": 1,
        });
        match value {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn unknown_rule_kind_names_are_ignored() {
        let kinds = parse_rule_kinds(&names(&["page_rules", "bogus", "rate_limiting"]));
        assert_eq!(kinds, vec![RuleKind::PageRules, RuleKind::RateLimiting]);
    }

    #[tokio::test]
    async fn copy_fails_request_when_source_unresolvable() {
        let (ctx, _repo, api) = create_test_context().await;
        api.add_zone("target.com", "z-t").await;
        let service = RulesService::new(ctx);

        let result = service
            .batch_copy(RulesCopyRequest {
                account_id: "acc-1".to_string(),
                source_domain: "missing.com".to_string(),
                target_domains: vec!["target.com".to_string()],
                rule_types: names(&["page_rules"]),
            })
            .await;

        assert!(matches!(result, Err(CoreError::ValidationError(_))));
        // 源解析失败时没有任何目标被访问
        assert_eq!(api.resolve_calls().await, vec!["missing.com".to_string()]);
    }

    #[tokio::test]
    async fn copy_scenario_counts_across_kinds() {
        let (ctx, _repo, api) = create_test_context().await;
        api.add_zone("source.com", "z-s").await;
        api.add_zone("target.com", "z-t").await;
        // 3 条页面规则，其中 1 条目标端拒绝；1 条防火墙规则
        api.add_rule("z-s", RuleKind::PageRules, rule("p1")).await;
        api.add_rule("z-s", RuleKind::PageRules, rule("p2")).await;
        api.add_rule("z-s", RuleKind::PageRules, rule("p3")).await;
        api.reject_rule_marker("p2").await;
        api.add_rule("z-s", RuleKind::FirewallRules, rule("f1")).await;
        let service = RulesService::new(ctx);

        let results = service
            .batch_copy(RulesCopyRequest {
                account_id: "acc-1".to_string(),
                source_domain: "source.com".to_string(),
                target_domains: vec!["target.com".to_string()],
                rule_types: names(&["page_rules", "firewall_rules"]),
            })
            .await
            .unwrap();

        assert!(results[0].success);
        assert_eq!(results[0].count, 3);
        assert_eq!(results[0].message, "Copied 3 rules");
    }

    #[tokio::test]
    async fn copy_strips_volatile_fields_before_post() {
        let (ctx, _repo, api) = create_test_context().await;
        api.add_zone("source.com", "z-s").await;
        api.add_zone("target.com", "z-t").await;
        api.add_rule("z-s", RuleKind::PageRules, rule("p1")).await;
        let service = RulesService::new(ctx);

        service
            .batch_copy(RulesCopyRequest {
                account_id: "acc-1".to_string(),
                source_domain: "source.com".to_string(),
                target_domains: vec!["target.com".to_string()],
                rule_types: names(&["page_rules"]),
            })
            .await
            .unwrap();

        let created = api.created_rules().await;
        assert_eq!(created.len(), 1);
        let posted = &created[0].2;
        assert!(!posted.contains_key("id"));
        assert!(!posted.contains_key("created_on"));
        assert!(!posted.contains_key("modified_on"));
        assert!(posted.contains_key("priority"));
    }

    #[tokio::test]
    async fn copy_to_unresolvable_target_fails_that_target_only() {
        let (ctx, _repo, api) = create_test_context().await;
        api.add_zone("source.com", "z-s").await;
        api.add_zone("good.com", "z-g").await;
        api.add_rule("z-s", RuleKind::PageRules, rule("p1")).await;
        let service = RulesService::new(ctx);

        let results = service
            .batch_copy(RulesCopyRequest {
                account_id: "acc-1".to_string(),
                source_domain: "source.com".to_string(),
                target_domains: vec!["good.com".to_string(), "bad.com".to_string()],
                rule_types: names(&["page_rules"]),
            })
            .await
            .unwrap();

        assert!(results[0].success);
        assert!(!results[1].success);
        assert_eq!(results[1].message, "Target zone not found");
    }

    #[tokio::test]
    async fn delete_counts_all_kinds_and_reports_empty() {
        let (ctx, _repo, api) = create_test_context().await;
        api.add_zone("full.com", "z-1").await;
        api.add_zone("empty.com", "z-2").await;
        api.add_rule("z-1", RuleKind::PageRules, rule("p1")).await;
        api.add_rule("z-1", RuleKind::RateLimiting, rule("r1")).await;
        let service = RulesService::new(ctx);

        let results = service
            .batch_delete(RulesDeleteRequest {
                account_id: "acc-1".to_string(),
                domains: vec!["full.com".to_string(), "empty.com".to_string()],
                rule_types: names(&["page_rules", "firewall_rules", "rate_limiting"]),
            })
            .await
            .unwrap();

        assert!(results[0].success);
        assert_eq!(results[0].count, 2);
        assert_eq!(results[0].message, "Deleted 2 rules");
        assert!(!results[1].success);
        assert_eq!(results[1].message, "No rules found");
    }
}
