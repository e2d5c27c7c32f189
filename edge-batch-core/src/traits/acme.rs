//! ACME 客户端抽象 Trait

use std::path::Path;

use async_trait::async_trait;

use edge_batch_provider::EdgeCredentials;

/// 一次外部命令执行的结果
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// stdout + stderr 合并输出
    pub output: String,
    pub ok: bool,
}

/// 证书签发协作方
///
/// 生产实现为 [`ShellAcmeClient`](crate::acme::ShellAcmeClient)，
/// 通过 acme.sh 的 DNS 验证模式完成签发。
#[async_trait]
pub trait AcmeClient: Send + Sync {
    /// 客户端是否可用（acme.sh 是否安装）
    async fn available(&self) -> bool;

    /// 签发证书，`wildcard` 为 true 时同时申请 `*.domain`
    async fn issue(
        &self,
        domain: &str,
        wildcard: bool,
        credentials: &EdgeCredentials,
    ) -> CommandOutput;

    /// 把已签发的证书安装到 `cert_dir`
    async fn install(&self, domain: &str, wildcard: bool, cert_dir: &Path) -> CommandOutput;
}
