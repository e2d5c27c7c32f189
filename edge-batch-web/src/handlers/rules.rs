//! 规则批量接口

use actix_web::{web, HttpResponse};

use edge_batch_core::services::RulesService;
use edge_batch_core::types::{RulesCopyRequest, RulesDeleteRequest};
use edge_batch_core::ServiceContext;

use crate::error::WebError;

pub async fn batch_copy(
    ctx: web::Data<ServiceContext>,
    body: web::Json<RulesCopyRequest>,
) -> Result<HttpResponse, WebError> {
    let results = RulesService::new(ctx.into_inner())
        .batch_copy(body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(results))
}

pub async fn batch_delete(
    ctx: web::Data<ServiceContext>,
    body: web::Json<RulesDeleteRequest>,
) -> Result<HttpResponse, WebError> {
    let results = RulesService::new(ctx.into_inner())
        .batch_delete(body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(results))
}
