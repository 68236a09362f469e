//! 错误类型
//!
//! 配置错误在启动时致命；运行期只有“已完成后再次运行”一种错误。
//! 内部契约违背（例如越界的 class 下标）直接 panic。

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("`{field}` has {actual} entries, expected {expected}")]
    LengthMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("`{field}` must be positive, got {value}")]
    NonPositive { field: String, value: f64 },

    #[error("`{field}` must be finite and non-negative, got {value}")]
    Negative { field: String, value: f64 },

    #[error("no servers configured")]
    NoServers,
}

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("simulation already completed; build a new instance to run again")]
    AlreadyCompleted,
}
