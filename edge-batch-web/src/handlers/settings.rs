//! Zone 设置批量接口（SSL / 缓存 / 优化 / 安全杂项）

use actix_web::{web, HttpResponse};

use edge_batch_core::services::SettingsService;
use edge_batch_core::types::{
    BulkSettingsRequest, CacheSettingsRequest, OptimizationRequest, SslSettingsRequest,
};
use edge_batch_core::ServiceContext;

use crate::error::WebError;

pub async fn ssl(
    ctx: web::Data<ServiceContext>,
    body: web::Json<SslSettingsRequest>,
) -> Result<HttpResponse, WebError> {
    let results = SettingsService::new(ctx.into_inner())
        .batch_ssl(body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(results))
}

pub async fn cache(
    ctx: web::Data<ServiceContext>,
    body: web::Json<CacheSettingsRequest>,
) -> Result<HttpResponse, WebError> {
    let results = SettingsService::new(ctx.into_inner())
        .batch_cache(body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(results))
}

pub async fn optimization(
    ctx: web::Data<ServiceContext>,
    body: web::Json<OptimizationRequest>,
) -> Result<HttpResponse, WebError> {
    let results = SettingsService::new(ctx.into_inner())
        .batch_optimization(body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(results))
}

pub async fn bulk(
    ctx: web::Data<ServiceContext>,
    body: web::Json<BulkSettingsRequest>,
) -> Result<HttpResponse, WebError> {
    let results = SettingsService::new(ctx.into_inner())
        .batch_bulk(body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(results))
}
