//! 设置执行计划
//!
//! 一个设置族就是一份数据：按声明顺序排列的 zone 设置步骤。
//! 空字符串字段不产生步骤（既不尝试也不计数）。

use serde_json::{json, Value};

use super::requests::{
    BulkSettingsRequest, CacheSettingsRequest, OptimizationRequest, SslSettingsRequest,
};

/// 计划中的单个步骤
#[derive(Debug, Clone)]
pub enum PlanStep {
    /// `PATCH /zones/{id}/settings/{key}`
    Setting { key: &'static str, value: Value },
    /// 清空缓存（purge everything）
    PurgeCache,
    /// 取值非法：计入尝试但必然失败
    Rejected { key: &'static str },
}

/// 某个设置族在一个 zone 上要执行的全部步骤
#[derive(Debug, Clone, Default)]
pub struct SettingPlan {
    steps: Vec<PlanStep>,
}

impl SettingPlan {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn steps(&self) -> &[PlanStep] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// 追加一个字符串取值的设置，空值跳过
    pub fn push_text(&mut self, key: &'static str, value: &str) {
        if !value.is_empty() {
            self.steps.push(PlanStep::Setting {
                key,
                value: Value::String(value.to_string()),
            });
        }
    }

    /// 追加缓存清空步骤
    pub fn push_purge(&mut self, requested: bool) {
        if requested {
            self.steps.push(PlanStep::PurgeCache);
        }
    }

    /// 追加 minify 设置，取值映射为三开关对象
    pub fn push_minify(&mut self, value: &str) {
        if value.is_empty() {
            return;
        }
        let (css, html, js) = match value {
            "all" => ("on", "on", "on"),
            "css" => ("on", "off", "off"),
            "html" => ("off", "on", "off"),
            "js" => ("off", "off", "on"),
            "off" => ("off", "off", "off"),
            _ => {
                self.steps.push(PlanStep::Rejected { key: "minify" });
                return;
            }
        };
        self.steps.push(PlanStep::Setting {
            key: "minify",
            value: json!({ "css": css, "html": html, "js": js }),
        });
    }

    /// SSL 设置族
    #[must_use]
    pub fn from_ssl(req: &SslSettingsRequest) -> Self {
        let mut plan = Self::new();
        plan.push_text("ssl", &req.ssl_mode);
        plan.push_text("min_tls_version", &req.min_tls_version);
        plan.push_text("always_use_https", &req.always_use_https);
        plan.push_text("automatic_https_rewrites", &req.automatic_https);
        plan.push_text("opportunistic_encryption", &req.opportunistic_enc);
        plan
    }

    /// 缓存设置族（purge 步骤在前，与前端展示顺序一致）
    #[must_use]
    pub fn from_cache(req: &CacheSettingsRequest) -> Self {
        let mut plan = Self::new();
        plan.push_purge(req.purge_cache);
        plan.push_text("cache_level", &req.cache_level);
        plan.push_text("browser_cache_ttl", &req.browser_ttl);
        plan.push_text("always_online", &req.always_online);
        plan.push_text("development_mode", &req.development_mode);
        plan
    }

    /// 速度优化设置族
    #[must_use]
    pub fn from_optimization(req: &OptimizationRequest) -> Self {
        let mut plan = Self::new();
        plan.push_minify(&req.minify);
        plan.push_text("brotli", &req.brotli);
        plan.push_text("early_hints", &req.early_hints);
        plan.push_text("http2", &req.http2);
        plan.push_text("http3", &req.http3);
        plan.push_text("0rtt", &req.zero_rtt);
        plan.push_text("ipv6", &req.ipv6);
        plan.push_text("websockets", &req.web_sockets);
        plan.push_text("pseudo_ipv4", &req.pseudo_ipv4);
        plan.push_text("rocket_loader", &req.rocket_loader);
        plan.push_text("mirage", &req.mirage);
        plan.push_text("polish", &req.polish);
        plan
    }

    /// 安全杂项设置族
    #[must_use]
    pub fn from_bulk(req: &BulkSettingsRequest) -> Self {
        let mut plan = Self::new();
        plan.push_text("security_level", &req.security_level);
        plan.push_text("challenge_ttl", &req.challenge_passage);
        plan.push_text("browser_check", &req.browser_integrity);
        plan.push_text("hotlink_protection", &req.hotlink_protection);
        plan.push_text("email_obfuscation", &req.email_obfuscation);
        plan.push_text("server_side_exclude", &req.server_side_excludes);
        plan.push_text("waf", &req.waf);
        plan.push_text("privacy_pass", &req.privacy_pass);
        plan.push_text("automatic_platform_optimization", &req.automatic_platform);
        plan.push_text("orange_to_orange", &req.orange_to_orange);
        plan.push_text("proxy_read_timeout", &req.proxy_read_timeout);
        plan.push_text("prefetch_preload", &req.prefetch_preload);
        plan.push_text("response_buffering", &req.response_buffering);
        plan.push_text("sort_query_string_for_cache", &req.sort_query_string);
        plan.push_text("true_client_ip_header", &req.true_client_ip);
        plan.push_text("crawler_hints", &req.crawler_hints);
        plan
    }
}
