//! 仿真层错误类型定义
//!
//! 单步推进（`Simulator::advance`）本身不会失败，错误只来自配置的构造与加载。

use thiserror::Error;

/// 仿真层错误类型
#[derive(Error, Debug)]
pub enum SimError {
    /// 配置参数非法
    #[error("Invalid config field `{field}`: {reason}")]
    InvalidConfig {
        /// 字段名
        field: &'static str,
        /// 失败原因
        reason: String,
    },

    /// TOML 解析错误
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML 序列化错误
    #[error("Config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// 配置文件读写错误
    #[error("Config IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SimError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}
