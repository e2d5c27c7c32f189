//! 账户管理接口

use actix_web::{web, HttpResponse};
use serde_json::json;

use edge_batch_core::services::AccountService;
use edge_batch_core::types::Account;
use edge_batch_core::ServiceContext;

use crate::error::WebError;

pub async fn list(ctx: web::Data<ServiceContext>) -> Result<HttpResponse, WebError> {
    let accounts = AccountService::new(ctx.into_inner()).list().await?;
    Ok(HttpResponse::Ok().json(accounts))
}

pub async fn save(
    ctx: web::Data<ServiceContext>,
    body: web::Json<Account>,
) -> Result<HttpResponse, WebError> {
    let saved = AccountService::new(ctx.into_inner())
        .save(body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(saved))
}

pub async fn test(
    ctx: web::Data<ServiceContext>,
    body: web::Json<Account>,
) -> Result<HttpResponse, WebError> {
    let outcome = AccountService::new(ctx.into_inner())
        .test_credentials(&body)
        .await;
    Ok(HttpResponse::Ok().json(outcome))
}

pub async fn delete(
    ctx: web::Data<ServiceContext>,
    id: web::Path<String>,
) -> Result<HttpResponse, WebError> {
    AccountService::new(ctx.into_inner()).delete(&id).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}
