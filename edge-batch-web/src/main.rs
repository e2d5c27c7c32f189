//! Edge Batch Toolkit web API
//!
//! Actix-web 后端：登录 + JWT 中间件保护的批处理路由，账户数据
//! 落在 accounts.json，证书打包文件从 cert_dir 提供下载。

use std::sync::Arc;

use actix_web::middleware::from_fn;
use actix_web::{web, App, HttpServer};
use tracing_subscriber::EnvFilter;

use edge_batch_core::acme::ShellAcmeClient;
use edge_batch_core::services::CertService;
use edge_batch_core::traits::CloudflareApiFactory;
use edge_batch_core::{AcmeClient, ServiceContext};

mod auth;
mod config;
mod error;
mod handlers;
mod repository;

use config::AppConfig;
use repository::JsonFileAccountRepository;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load("config.toml");

    let repository = JsonFileAccountRepository::open(config.accounts_file.clone())
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let ctx = Arc::new(ServiceContext::new(
        Arc::new(repository),
        Arc::new(CloudflareApiFactory),
    ));

    let acme: Arc<dyn AcmeClient> = Arc::new(ShellAcmeClient::new());
    let cert_service = web::Data::new(CertService::new(
        ctx.clone(),
        acme,
        config.cert_dir.clone(),
    ));

    let ctx_data = web::Data::from(ctx);
    let tracker = web::Data::new(auth::LoginTracker::new());
    let listen = config.listen.clone();
    let config_data = web::Data::new(config);

    tracing::info!("Server starting on {listen}");

    HttpServer::new(move || {
        App::new()
            .app_data(ctx_data.clone())
            .app_data(config_data.clone())
            .app_data(tracker.clone())
            .app_data(cert_service.clone())
            .route("/api/login", web::post().to(auth::login))
            .route(
                "/api/certs/download/{filename}",
                web::get().to(handlers::certs::download),
            )
            .service(
                web::scope("/api")
                    .wrap(from_fn(auth::require_auth))
                    .route("/accounts", web::get().to(handlers::accounts::list))
                    .route("/accounts", web::post().to(handlers::accounts::save))
                    .route("/accounts/test", web::post().to(handlers::accounts::test))
                    .route("/accounts/{id}", web::delete().to(handlers::accounts::delete))
                    .route("/zones/batch-add", web::post().to(handlers::zones::batch_add))
                    .route(
                        "/zones/batch-delete",
                        web::post().to(handlers::zones::batch_delete),
                    )
                    .route("/zones/export", web::post().to(handlers::zones::export))
                    .route("/dns/batch-parse", web::post().to(handlers::dns::batch_parse))
                    .route(
                        "/dns/batch-delete",
                        web::post().to(handlers::dns::batch_delete),
                    )
                    .route(
                        "/dns/proxy-toggle",
                        web::post().to(handlers::dns::proxy_toggle),
                    )
                    .route("/ssl/batch-settings", web::post().to(handlers::settings::ssl))
                    .route(
                        "/certs/batch-apply",
                        web::post().to(handlers::certs::batch_apply),
                    )
                    .route("/certs/list", web::get().to(handlers::certs::list))
                    .route(
                        "/rules/batch-copy",
                        web::post().to(handlers::rules::batch_copy),
                    )
                    .route(
                        "/rules/batch-delete",
                        web::post().to(handlers::rules::batch_delete),
                    )
                    .route(
                        "/cache/batch-settings",
                        web::post().to(handlers::settings::cache),
                    )
                    .route(
                        "/optimization/batch-settings",
                        web::post().to(handlers::settings::optimization),
                    )
                    .route(
                        "/bulk-settings/batch-apply",
                        web::post().to(handlers::settings::bulk),
                    )
                    .route(
                        "/email/batch-routing",
                        web::post().to(handlers::email::batch_routing),
                    ),
            )
    })
    .bind(&listen)?
    .run()
    .await
}
