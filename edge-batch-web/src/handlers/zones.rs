//! Zone 批量接口

use actix_web::{web, HttpResponse};

use edge_batch_core::services::ZoneService;
use edge_batch_core::types::{ZoneBatchRequest, ZoneExportRequest};
use edge_batch_core::ServiceContext;

use crate::error::WebError;

pub async fn batch_add(
    ctx: web::Data<ServiceContext>,
    body: web::Json<ZoneBatchRequest>,
) -> Result<HttpResponse, WebError> {
    let results = ZoneService::new(ctx.into_inner())
        .batch_create(body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(results))
}

pub async fn batch_delete(
    ctx: web::Data<ServiceContext>,
    body: web::Json<ZoneBatchRequest>,
) -> Result<HttpResponse, WebError> {
    let results = ZoneService::new(ctx.into_inner())
        .batch_delete(body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(results))
}

pub async fn export(
    ctx: web::Data<ServiceContext>,
    body: web::Json<ZoneExportRequest>,
) -> Result<HttpResponse, WebError> {
    let rows = ZoneService::new(ctx.into_inner())
        .export(&body.account_id)
        .await?;
    Ok(HttpResponse::Ok().json(rows))
}
