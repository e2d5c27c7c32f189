//! 登录、JWT 签发与校验、登录限流

use std::collections::HashMap;
use std::sync::Mutex;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::middleware::Next;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::AppConfig;

/// 连续失败多少次后锁定
const MAX_FAILURES: u32 = 5;
/// 锁定与失败计数窗口（分钟）
const LOCKOUT_MINUTES: i64 = 15;
/// 令牌有效期（秒）
const TOKEN_TTL_SECS: i64 = 86_400;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user: String,
    pub ip: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// 认证失败响应
#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::MissingToken => "未提供认证令牌",
            Self::InvalidToken => "令牌无效或已过期",
        };
        f.write_str(msg)
    }
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::Unauthorized().json(json!({ "error": self.to_string() }))
    }
}

pub fn issue_token(
    user: &str,
    ip: &str,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
        user: user.to_string(),
        ip: ip.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::seconds(TOKEN_TTL_SECS)).timestamp(),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
}

pub fn validate_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let validation = Validation::new(Algorithm::HS256);
    decode::<Claims>(token, &DecodingKey::from_secret(secret.as_ref()), &validation)
        .map(|data| data.claims)
}

#[derive(Debug, Default)]
struct LoginAttempt {
    count: u32,
    last_attempt: Option<DateTime<Utc>>,
    locked_until: Option<DateTime<Utc>>,
}

/// 失败一次后的状态
#[derive(Debug, PartialEq, Eq)]
pub enum FailureOutcome {
    /// 达到上限，锁定
    LockedOut,
    /// 剩余尝试次数
    Remaining(u32),
}

/// 按客户端 IP 的登录限流器
#[derive(Debug, Default)]
pub struct LoginTracker {
    attempts: Mutex<HashMap<String, LoginAttempt>>,
}

impl LoginTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前是否处于锁定期，返回剩余分钟数
    pub fn locked_minutes(&self, ip: &str) -> Option<i64> {
        self.locked_minutes_at(ip, Utc::now())
    }

    fn locked_minutes_at(&self, ip: &str, now: DateTime<Utc>) -> Option<i64> {
        #[allow(clippy::unwrap_used)]
        let mut attempts = self.attempts.lock().unwrap();
        let attempt = attempts.get_mut(ip)?;

        if let Some(until) = attempt.locked_until {
            if now < until {
                return Some((until - now).num_minutes() + 1);
            }
        }

        // 窗口过后计数归零
        if let Some(last) = attempt.last_attempt {
            if now - last > Duration::minutes(LOCKOUT_MINUTES) {
                attempt.count = 0;
            }
        }
        None
    }

    /// 记录一次失败，返回是否触发锁定
    pub fn record_failure(&self, ip: &str) -> FailureOutcome {
        self.record_failure_at(ip, Utc::now())
    }

    fn record_failure_at(&self, ip: &str, now: DateTime<Utc>) -> FailureOutcome {
        #[allow(clippy::unwrap_used)]
        let mut attempts = self.attempts.lock().unwrap();
        let attempt = attempts.entry(ip.to_string()).or_default();
        attempt.count += 1;
        attempt.last_attempt = Some(now);

        if attempt.count >= MAX_FAILURES {
            attempt.locked_until = Some(now + Duration::minutes(LOCKOUT_MINUTES));
            FailureOutcome::LockedOut
        } else {
            FailureOutcome::Remaining(MAX_FAILURES - attempt.count)
        }
    }

    /// 登录成功后清除该 IP 的记录
    pub fn reset(&self, ip: &str) {
        #[allow(clippy::unwrap_used)]
        self.attempts.lock().unwrap().remove(ip);
    }
}

fn client_ip(req: &HttpRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string()
}

/// POST /api/login
pub async fn login(
    req: HttpRequest,
    body: web::Json<LoginRequest>,
    config: web::Data<AppConfig>,
    tracker: web::Data<LoginTracker>,
) -> HttpResponse {
    if body.username.is_empty() || body.password.is_empty() {
        return HttpResponse::BadRequest().json(json!({ "error": "用户名和密码不能为空" }));
    }

    let ip = client_ip(&req);

    if let Some(minutes) = tracker.locked_minutes(&ip) {
        return HttpResponse::TooManyRequests().json(json!({
            "error": "登录失败次数过多，请稍后再试",
            "locked_minutes": minutes,
        }));
    }

    if body.username != config.admin.username || body.password != config.admin.password {
        return match tracker.record_failure(&ip) {
            FailureOutcome::LockedOut => HttpResponse::Unauthorized().json(json!({
                "error": "登录失败次数过多，账户已锁定15分钟",
            })),
            FailureOutcome::Remaining(remaining) => HttpResponse::Unauthorized().json(json!({
                "error": "用户名或密码错误",
                "remaining_attempts": remaining,
            })),
        };
    }

    tracker.reset(&ip);

    match issue_token(&body.username, &ip, &config.jwt_secret) {
        Ok(token) => HttpResponse::Ok().json(json!({
            "token": token,
            "expires_in": TOKEN_TTL_SECS,
        })),
        Err(e) => {
            tracing::error!("Token signing failed: {e}");
            HttpResponse::InternalServerError().json(json!({ "error": "生成令牌失败" }))
        }
    }
}

/// Bearer 校验中间件，挂在 /api 受保护分组上
pub async fn require_auth(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let header = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if header.is_empty() {
        return Err(AuthError::MissingToken.into());
    }

    // 兼容裸令牌和 `Bearer <token>` 两种写法
    let token = header.strip_prefix("Bearer ").unwrap_or(header);

    let Some(config) = req.app_data::<web::Data<AppConfig>>() else {
        return Err(AuthError::InvalidToken.into());
    };

    if validate_token(token, &config.jwt_secret).is_err() {
        return Err(AuthError::InvalidToken.into());
    }

    next.call(req).await
}
