//! 公共工具函数

use std::time::Duration;

use reqwest::Client;

use crate::JsonMap;

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置的 HTTP Client
///
/// 请求超时是整个批处理的唯一时延上界：单个 zone 的慢请求不会阻塞
/// 其他 zone 的流水线，但会决定整批的完成时间。
#[must_use]
#[allow(clippy::expect_used)]
pub fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}

/// 规则对象回传前剥离易变字段
///
/// 规则体的结构由远端定义，这里只做透传；但 `id`、`created_on`、
/// `modified_on` 原样回传会被远端拒绝，必须先删除。
pub fn strip_volatile_fields(rule: &mut JsonMap) {
    rule.remove("id");
    rule.remove("created_on");
    rule.remove("modified_on");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strips_volatile_keeps_rest() {
        let mut rule: JsonMap = serde_json::from_value(json!({
            "id": "abc123",
            "created_on": "2024-01-01T00:00:00Z",
            "modified_on": "2024-01-02T00:00:00Z",
            "targets": [{"target": "url"}],
            "actions": [{"id": "forwarding_url"}],
            "priority": 1,
        }))
        .unwrap();

        strip_volatile_fields(&mut rule);

        assert!(!rule.contains_key("id"));
        assert!(!rule.contains_key("created_on"));
        assert!(!rule.contains_key("modified_on"));
        assert!(rule.contains_key("targets"));
        assert!(rule.contains_key("actions"));
        assert_eq!(rule["priority"], json!(1));
    }

    #[test]
    fn strip_on_clean_rule_is_noop() {
        let mut rule: JsonMap =
            serde_json::from_value(json!({"expression": "ip.src eq 1.2.3.4"})).unwrap();
        strip_volatile_fields(&mut rule);
        assert_eq!(rule.len(), 1);
    }
}
