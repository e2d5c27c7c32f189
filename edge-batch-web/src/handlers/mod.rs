//! 路由处理器，全部是服务层的薄封装

pub mod accounts;
pub mod certs;
pub mod dns;
pub mod email;
pub mod rules;
pub mod settings;
pub mod zones;
