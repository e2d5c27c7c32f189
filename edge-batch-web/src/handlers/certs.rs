//! 证书批量申请与下载接口

use std::path::Path;

use actix_files::NamedFile;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::json;

use edge_batch_core::services::CertService;
use edge_batch_core::types::CertRequest;

use crate::config::AppConfig;
use crate::error::WebError;

pub async fn batch_apply(
    service: web::Data<CertService>,
    body: web::Json<CertRequest>,
) -> Result<HttpResponse, WebError> {
    let results = service.batch_apply(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(results))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CertFileEntry {
    domain: String,
    filename: String,
    size: u64,
    modified_at: String,
    download_url: String,
}

/// GET /api/certs/list
pub async fn list(config: web::Data<AppConfig>) -> HttpResponse {
    let mut entries = Vec::new();

    let Ok(mut dir) = tokio::fs::read_dir(&config.cert_dir).await else {
        return HttpResponse::Ok().json(entries);
    };

    while let Ok(Some(entry)) = dir.next_entry().await {
        let filename = entry.file_name().to_string_lossy().into_owned();
        let Some(domain) = filename.strip_suffix(".zip") else {
            continue;
        };
        let Ok(metadata) = entry.metadata().await else {
            continue;
        };

        let modified_at = metadata
            .modified()
            .map(|t| DateTime::<Local>::from(t).format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default();

        entries.push(CertFileEntry {
            domain: domain.to_string(),
            download_url: format!("/api/certs/download/{filename}"),
            size: metadata.len(),
            modified_at,
            filename,
        });
    }

    HttpResponse::Ok().json(entries)
}

/// 拒绝路径穿越和子目录访问
fn is_safe_filename(name: &str) -> bool {
    !name.is_empty() && !name.contains("..") && !name.contains('/') && !name.contains('\\')
}

/// GET /api/certs/download/{filename}，无需认证
pub async fn download(
    req: HttpRequest,
    filename: web::Path<String>,
    config: web::Data<AppConfig>,
) -> HttpResponse {
    let filename = filename.into_inner();
    if !is_safe_filename(&filename) {
        return HttpResponse::BadRequest().json(json!({ "error": "Invalid filename" }));
    }

    let path = Path::new(&config.cert_dir).join(&filename);
    let Ok(file) = NamedFile::open_async(&path).await else {
        return HttpResponse::NotFound().json(json!({ "error": "File not found" }));
    };

    file.set_content_disposition(ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(filename)],
    })
    .into_response(&req)
}
