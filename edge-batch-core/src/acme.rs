//! acme.sh 命令行封装
//!
//! 通过 DNS 验证（dns_cf）签发证书，凭证经环境变量传入。

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;

use edge_batch_provider::EdgeCredentials;

use crate::traits::{AcmeClient, CommandOutput};

/// 调用 `~/.acme.sh/acme.sh` 的生产实现
pub struct ShellAcmeClient {
    script_path: PathBuf,
}

impl ShellAcmeClient {
    #[must_use]
    pub fn new() -> Self {
        let home = std::env::var("HOME").unwrap_or_default();
        Self {
            script_path: PathBuf::from(home).join(".acme.sh").join("acme.sh"),
        }
    }

    /// 指定脚本路径创建（测试用）
    #[must_use]
    pub fn with_script_path(script_path: impl Into<PathBuf>) -> Self {
        Self {
            script_path: script_path.into(),
        }
    }

    fn domain_args(domain: &str, wildcard: bool) -> Vec<String> {
        let mut args = vec!["-d".to_string(), domain.to_string()];
        if wildcard {
            args.push("-d".to_string());
            args.push(format!("*.{domain}"));
        }
        args
    }

    async fn run(&self, cmd: &mut Command) -> CommandOutput {
        match cmd.output().await {
            Ok(out) => {
                let mut output = String::from_utf8_lossy(&out.stdout).into_owned();
                output.push_str(&String::from_utf8_lossy(&out.stderr));
                CommandOutput {
                    output,
                    ok: out.status.success(),
                }
            }
            Err(e) => CommandOutput {
                output: e.to_string(),
                ok: false,
            },
        }
    }
}

impl Default for ShellAcmeClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AcmeClient for ShellAcmeClient {
    async fn available(&self) -> bool {
        tokio::fs::metadata(&self.script_path).await.is_ok()
    }

    async fn issue(
        &self,
        domain: &str,
        wildcard: bool,
        credentials: &EdgeCredentials,
    ) -> CommandOutput {
        let mut cmd = Command::new(&self.script_path);
        cmd.arg("--issue")
            .arg("--dns")
            .arg("dns_cf")
            .args(Self::domain_args(domain, wildcard))
            .env("CF_Key", &credentials.api_key)
            .env("CF_Email", &credentials.email);
        self.run(&mut cmd).await
    }

    async fn install(&self, domain: &str, wildcard: bool, cert_dir: &Path) -> CommandOutput {
        let mut cmd = Command::new(&self.script_path);
        cmd.arg("--install-cert")
            .args(Self::domain_args(domain, wildcard))
            .arg("--cert-file")
            .arg(cert_dir.join("cert.pem"))
            .arg("--key-file")
            .arg(cert_dir.join("key.pem"))
            .arg("--fullchain-file")
            .arg(cert_dir.join("fullchain.pem"))
            .arg("--ca-file")
            .arg(cert_dir.join("ca.pem"));
        self.run(&mut cmd).await
    }
}
