//! 邮件路由批量接口

use actix_web::{web, HttpResponse};

use edge_batch_core::services::EmailService;
use edge_batch_core::types::EmailRoutingRequest;
use edge_batch_core::ServiceContext;

use crate::error::WebError;

pub async fn batch_routing(
    ctx: web::Data<ServiceContext>,
    body: web::Json<EmailRoutingRequest>,
) -> Result<HttpResponse, WebError> {
    let results = EmailService::new(ctx.into_inner())
        .batch_routing(body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(results))
}
