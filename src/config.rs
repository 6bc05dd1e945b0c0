use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 考试服务 API 地址
    pub api_base_url: String,
    /// 会话令牌（由外部登录流程获得）
    pub token: String,
    /// 用户名
    pub user_name: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "https://jee-question-generator.onrender.com".to_string(),
            token: String::new(),
            user_name: String::new(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_base_url: std::env::var("JEE_API_BASE_URL").unwrap_or(default.api_base_url),
            token: std::env::var("JEE_ID_TOKEN").unwrap_or(default.token),
            user_name: std::env::var("JEE_USER_NAME").unwrap_or(default.user_name),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 从 TOML 配置文件加载
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::config_file_failed(path, e))?;
        let config = toml::from_str(&content)
            .map_err(|e| AppError::config_parse_failed(path, e))?;
        Ok(config)
    }

    /// 按优先级加载：JEE_CLIENT_CONFIG 指定的文件 > 环境变量 > 默认值
    pub fn load() -> AppResult<Self> {
        match std::env::var("JEE_CLIENT_CONFIG") {
            Ok(path) => Self::from_file(&path),
            Err(_) => Ok(Self::from_env()),
        }
    }
}

/// 已认证的用户会话
///
/// 显式传入需要它的组件（客户端调用、编排层），逻辑内部不读任何全局状态
#[derive(Clone, Debug)]
pub struct AuthSession {
    pub token: String,
    pub user_name: String,
}

impl AuthSession {
    /// 从配置构造；令牌或用户名缺失时返回认证错误，对应操作不应发起
    pub fn from_config(config: &Config) -> AppResult<Self> {
        if config.token.is_empty() {
            return Err(AppError::missing_token());
        }
        if config.user_name.is_empty() {
            return Err(AppError::missing_user_name());
        }
        Ok(Self {
            token: config.token.clone(),
            user_name: config.user_name.clone(),
        })
    }
}
