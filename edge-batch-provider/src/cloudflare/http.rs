//! Cloudflare HTTP 请求方法

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, Result};

use super::{CfResponse, CloudflareClient};

impl CloudflareClient {
    /// 构造带认证头的请求
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header("X-Auth-Email", &self.credentials.email)
            .header("X-Auth-Key", &self.credentials.api_key)
    }

    /// 发送请求并返回 (状态码, 响应体)
    async fn send(&self, builder: RequestBuilder) -> Result<(StatusCode, String)> {
        let response = builder.send().await.map_err(|e| ApiError::Network {
            detail: e.to_string(),
        })?;

        let status = response.status();
        log::debug!("Response Status: {status}");

        let text = response.text().await.map_err(|e| ApiError::Network {
            detail: format!("读取响应失败: {e}"),
        })?;
        log::debug!("Response Body: {text}");

        Ok((status, text))
    }

    /// 解码响应信封并提取 result
    fn decode<T: DeserializeOwned>(status: StatusCode, text: &str) -> Result<CfResponse<T>> {
        match serde_json::from_str::<CfResponse<T>>(text) {
            Ok(envelope) => {
                if envelope.success {
                    Ok(envelope)
                } else {
                    Err(Self::envelope_error(status, envelope.errors))
                }
            }
            Err(e) => {
                // 信封都解不开：非 2xx 当作远端错误，2xx 当作解析失败
                if status == StatusCode::FORBIDDEN {
                    Err(ApiError::AuthRejected {
                        message: format!("HTTP {}", status.as_u16()),
                    })
                } else if status.is_success() {
                    log::error!("JSON 解析失败: {e}");
                    Err(ApiError::Parse {
                        detail: e.to_string(),
                    })
                } else {
                    Err(ApiError::Api {
                        message: format!("HTTP {}", status.as_u16()),
                    })
                }
            }
        }
    }

    /// 取信封 errors 的第一条消息，缺失时退化为 `HTTP <status>`
    fn envelope_error(status: StatusCode, errors: Option<Vec<super::types::CfError>>) -> ApiError {
        let message = errors
            .and_then(|errs| errs.into_iter().next().map(|e| e.message))
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
        log::debug!("API 错误: {message}");
        if status == StatusCode::FORBIDDEN {
            ApiError::AuthRejected { message }
        } else {
            ApiError::Api { message }
        }
    }

    /// 执行 GET 请求
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        log::debug!("GET {path}");
        let (status, text) = self.send(self.request(Method::GET, path)).await?;
        let envelope = Self::decode::<T>(status, &text)?;
        envelope.result.ok_or_else(|| ApiError::Parse {
            detail: "响应中缺少 result 字段".to_string(),
        })
    }

    /// 执行 GET 请求（带分页信息），返回 (result, total_pages)
    pub(crate) async fn get_page<T: DeserializeOwned>(&self, path: &str) -> Result<(T, u32)> {
        log::debug!("GET {path}");
        let (status, text) = self.send(self.request(Method::GET, path)).await?;
        let envelope = Self::decode::<T>(status, &text)?;
        let total_pages = envelope.result_info.map_or(1, |i| i.total_pages);
        let result = envelope.result.ok_or_else(|| ApiError::Parse {
            detail: "响应中缺少 result 字段".to_string(),
        })?;
        Ok((result, total_pages))
    }

    /// 执行带 JSON body 的请求（POST / PUT / PATCH）
    pub(crate) async fn send_json<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T> {
        log::debug!("{method} {path}");
        let (status, text) = self.send(self.request(method, path).json(body)).await?;
        let envelope = Self::decode::<T>(status, &text)?;
        envelope.result.ok_or_else(|| ApiError::Parse {
            detail: "响应中缺少 result 字段".to_string(),
        })
    }

    /// 执行无 body 的 POST 请求
    pub(crate) async fn post_empty(&self, path: &str) -> Result<()> {
        log::debug!("POST {path}");
        let (status, text) = self.send(self.request(Method::POST, path)).await?;
        Self::decode::<serde_json::Value>(status, &text)?;
        Ok(())
    }

    /// 执行 DELETE 请求
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        log::debug!("DELETE {path}");
        let (status, text) = self.send(self.request(Method::DELETE, path)).await?;
        Self::decode::<serde_json::Value>(status, &text)?;
        Ok(())
    }
}
