//! 服务端配置（config.toml）

use std::path::Path;

use serde::Deserialize;

/// 管理员登录凭证
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_password")]
    pub password: String,
}

/// 服务端配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_listen")]
    pub listen: String,
    #[serde(default = "default_admin")]
    pub admin: AdminConfig,
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    #[serde(default = "default_cert_dir")]
    pub cert_dir: String,
    #[serde(default = "default_accounts_file")]
    pub accounts_file: String,
}

fn default_listen() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_username() -> String {
    "admin".to_string()
}

fn default_password() -> String {
    "admin".to_string()
}

fn default_admin() -> AdminConfig {
    AdminConfig {
        username: default_username(),
        password: default_password(),
    }
}

fn default_jwt_secret() -> String {
    "edge-batch-secret-change-in-production".to_string()
}

fn default_cert_dir() -> String {
    "certs".to_string()
}

fn default_accounts_file() -> String {
    "accounts.json".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            admin: default_admin(),
            jwt_secret: default_jwt_secret(),
            cert_dir: default_cert_dir(),
            accounts_file: default_accounts_file(),
        }
    }
}

impl AppConfig {
    /// 读取配置文件，缺失或损坏时告警并回退到默认值
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(raw) => match toml::from_str(&raw) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {e}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to load {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }
}
