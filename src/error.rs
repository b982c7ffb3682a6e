//! Copyright (c) 2025, Kirky.X
//!
//! MIT License
//!
//! 该模块定义了序列化层的错误类型和处理机制。

use thiserror::Error;

/// 序列化层错误类型枚举
///
/// 定义了编码、解码和配置过程中可能发生的各种错误类型
#[derive(Error, Debug)]
pub enum CodecError {
    /// 序列化错误
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// 反序列化错误
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// 空值处理违规
    ///
    /// 输入字节无法区分"缺失条目"与"损坏数据"时产生，
    /// 例如长度为零的输入
    #[error("Null handling violation: {0}")]
    NullHandlingViolation(String),

    /// 配置错误
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO错误
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// 序列化操作结果类型别名
///
/// 简化错误处理，所有编解码操作都返回此类型
pub type Result<T> = std::result::Result<T, CodecError>;
