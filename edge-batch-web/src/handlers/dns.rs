//! DNS 记录批量接口

use actix_web::{web, HttpResponse};

use edge_batch_core::services::DnsService;
use edge_batch_core::types::{DnsAddRequest, DnsDeleteRequest, ProxyToggleRequest};
use edge_batch_core::ServiceContext;

use crate::error::WebError;

pub async fn batch_parse(
    ctx: web::Data<ServiceContext>,
    body: web::Json<DnsAddRequest>,
) -> Result<HttpResponse, WebError> {
    let results = DnsService::new(ctx.into_inner())
        .batch_add(body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(results))
}

pub async fn batch_delete(
    ctx: web::Data<ServiceContext>,
    body: web::Json<DnsDeleteRequest>,
) -> Result<HttpResponse, WebError> {
    let results = DnsService::new(ctx.into_inner())
        .batch_delete(body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(results))
}

pub async fn proxy_toggle(
    ctx: web::Data<ServiceContext>,
    body: web::Json<ProxyToggleRequest>,
) -> Result<HttpResponse, WebError> {
    let results = DnsService::new(ctx.into_inner())
        .batch_proxy_toggle(body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(results))
}
