//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 桥接服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 直播会话配置
    #[serde(default)]
    pub live: LiveConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5070
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 直播会话配置
#[derive(Debug, Clone, Deserialize)]
pub struct LiveConfig {
    /// 能力开关初始值（宿主是否允许展示实时活动）
    #[serde(default = "default_capability_enabled")]
    pub capability_enabled: bool,

    /// 渲染事件广播容量
    #[serde(default = "default_event_buffer")]
    pub event_buffer: usize,
}

fn default_capability_enabled() -> bool {
    true
}

fn default_event_buffer() -> usize {
    100
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            capability_enabled: default_capability_enabled(),
            event_buffer: default_event_buffer(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
