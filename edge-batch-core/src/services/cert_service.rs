//! 证书批量申请服务
//!
//! 通过 ACME 协作方（acme.sh）以 DNS 验证签发证书，装入
//! `<cert_dir>/<domain>/`，并打包为 `<cert_dir>/<domain>.zip` 供下载。

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use edge_batch_provider::EdgeCredentials;

use crate::batch::run_batch;
use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::traits::AcmeClient;
use crate::types::{CertOutcome, CertRequest};

/// 打包进 ZIP 的证书文件，缺失的跳过
const CERT_FILES: [&str; 4] = ["cert.pem", "key.pem", "fullchain.pem", "ca.pem"];

/// 证书批量申请服务
pub struct CertService {
    ctx: Arc<ServiceContext>,
    acme: Arc<dyn AcmeClient>,
    cert_dir: PathBuf,
}

impl CertService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, acme: Arc<dyn AcmeClient>, cert_dir: impl Into<PathBuf>) -> Self {
        Self {
            ctx,
            acme,
            cert_dir: cert_dir.into(),
        }
    }

    pub async fn batch_apply(&self, req: CertRequest) -> CoreResult<Vec<CertOutcome>> {
        let account = self.ctx.get_account(&req.account_id).await?;
        let credentials = account.credentials();
        let wildcard = req.include_wildcard;

        Ok(run_batch(req.domains, |domain| {
            let credentials = credentials.clone();
            async move { self.apply_one(domain, wildcard, &credentials).await }
        })
        .await)
    }

    async fn apply_one(
        &self,
        domain: String,
        wildcard: bool,
        credentials: &EdgeCredentials,
    ) -> CertOutcome {
        let mut steps = Vec::new();

        if !self.acme.available().await {
            steps.push("错误: acme.sh 未安装".to_string());
            return Self::failure(domain, "acme.sh not installed", steps, None);
        }
        steps.push("✓ 检查 acme.sh 环境".to_string());

        let domain_dir = self.cert_dir.join(&domain);
        if let Err(e) = tokio::fs::create_dir_all(&domain_dir).await {
            log::warn!("Failed to create cert dir for {domain}: {e}");
        }
        steps.push("✓ 创建证书目录".to_string());

        let domain_list = if wildcard {
            format!("{domain} + *.{domain}")
        } else {
            domain.clone()
        };
        steps.push(format!("✓ 准备申请域名: {domain_list}"));

        steps.push("→ 调用 acme.sh 申请证书...".to_string());
        let issued = self.acme.issue(&domain, wildcard, credentials).await;
        if issued.ok {
            steps.push("✓ 证书申请成功".to_string());
        } else if issued.output.contains("Domains not changed") {
            // 证书仍然有效，acme.sh 拒绝重新签发，直接安装
            steps.push("✓ 证书已存在，准备安装".to_string());
        } else {
            steps.push("✗ 申请失败".to_string());
            steps.push(format!("错误详情: {}", issued.output));
            return Self::failure(domain, "申请失败", steps, None);
        }

        self.install_and_package(domain, wildcard, &domain_dir, steps)
            .await
    }

    async fn install_and_package(
        &self,
        domain: String,
        wildcard: bool,
        domain_dir: &Path,
        mut steps: Vec<String>,
    ) -> CertOutcome {
        steps.push("→ 安装证书文件...".to_string());
        let installed = self.acme.install(&domain, wildcard, domain_dir).await;
        if !installed.ok {
            steps.push("✗ 证书安装失败".to_string());
            steps.push(format!("错误详情: {}", installed.output));
            return Self::failure(domain, "安装失败", steps, None);
        }

        steps.push("✓ 证书文件安装完成".to_string());
        steps.push("→ 打包证书为 ZIP...".to_string());

        let zip_path = self.cert_dir.join(format!("{domain}.zip"));
        let source = domain_dir.to_path_buf();
        let target = zip_path.clone();
        let packaged =
            tokio::task::spawn_blocking(move || package_cert_files(&source, &target)).await;

        if !matches!(packaged, Ok(Ok(()))) {
            steps.push("✗ ZIP 打包失败".to_string());
            return Self::failure(
                domain,
                "打包失败",
                steps,
                Some(domain_dir.to_string_lossy().into_owned()),
            );
        }

        steps.push("✓ 证书打包完成".to_string());
        steps.push("✓ 全部完成，可以下载".to_string());

        let download_url = format!("/api/certs/download/{domain}.zip");
        CertOutcome {
            domain,
            success: true,
            message: "申请成功".to_string(),
            steps,
            cert_path: Some(zip_path.to_string_lossy().into_owned()),
            download_url: Some(download_url),
        }
    }

    fn failure(
        domain: String,
        message: &str,
        steps: Vec<String>,
        cert_path: Option<String>,
    ) -> CertOutcome {
        CertOutcome {
            domain,
            success: false,
            message: message.to_string(),
            steps,
            cert_path,
            download_url: None,
        }
    }
}

/// 把证书文件打包为 ZIP，缺失的文件跳过不报错
fn package_cert_files(source_dir: &Path, zip_path: &Path) -> io::Result<()> {
    let file = std::fs::File::create(zip_path)?;
    let mut archive = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for name in CERT_FILES {
        let path = source_dir.join(name);
        if !path.exists() {
            continue;
        }
        archive.start_file(name, options).map_err(io::Error::other)?;
        let mut f = std::fs::File::open(&path)?;
        io::copy(&mut f, &mut archive)?;
    }

    archive.finish().map_err(io::Error::other)?;
    Ok(())
}
