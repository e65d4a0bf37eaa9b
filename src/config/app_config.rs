//! 应用配置管理
//!
//! 启动时从环境变量（以及 `.env` 文件）一次性构建配置，之后只读，
//! 显式传递给需要它的组件。

use secrecy::Secret;
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crate::error::AppError;

const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// 应用配置结构体
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// LLM API 密钥
    pub api_key: Secret<String>,

    /// LLM API 基础 URL
    pub base_url: String,

    /// 监听地址
    pub host: String,

    /// 监听端口
    pub port: u16,

    /// LLM 请求超时（秒）
    pub llm_timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_llm_timeout_secs() -> u64 {
    120
}

impl AppConfig {
    /// 从进程环境加载配置
    ///
    /// 先读取 `.env`（若存在），缺少 `OPENAI_API_KEY` 时返回错误。
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 使用给定的查找函数构建配置
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                AppError::Config(format!("environment variable {} not found", API_KEY_VAR))
            })?;

        Ok(Self {
            api_key: Secret::new(api_key),
            base_url: lookup("OPENAI_BASE_URL").unwrap_or_else(default_base_url),
            host: lookup("HOST").unwrap_or_else(default_host),
            port: parse_var(&lookup, "PORT")?.unwrap_or_else(default_port),
            llm_timeout_secs: parse_var(&lookup, "LLM_TIMEOUT_SECS")?
                .unwrap_or_else(default_llm_timeout_secs),
        })
    }

    /// 服务监听地址
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        let ip = IpAddr::from_str(&self.host)
            .map_err(|e| AppError::Config(format!("invalid HOST '{}': {}", self.host, e)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| AppError::Config(format!("invalid {} '{}': {}", key, raw, e))),
        None => Ok(None),
    }
}
