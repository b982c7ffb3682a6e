//! Copyright (c) 2025-2026, Kirky.X
//!
//! MIT License
//!
//! 该模块定义了Bincode序列化器的实现。

use super::Serializer;
use crate::error::{CodecError, Result};
use serde::{de::DeserializeOwned, Serialize};

/// Bincode序列化器
///
/// 实现基于bincode的序列化和反序列化。Bincode是定位二进制格式，
/// 条目类型在此路径上使用Packed形态，时间以微秒刻度承载。
/// 空值编码为单字节的Option判别标记。
#[derive(Clone, Default)]
pub struct BincodeSerializer;

impl BincodeSerializer {
    /// 创建新的Bincode序列化器
    pub fn new() -> Self {
        Self
    }
}

impl Serializer for BincodeSerializer {
    /// 序列化可选值为Bincode字节数组
    fn serialize<T: Serialize + Sync>(&self, value: Option<&T>) -> Result<Vec<u8>> {
        bincode::serialize(&value).map_err(|e| CodecError::Serialization(e.to_string()))
    }

    /// 从Bincode字节数组反序列化可选值
    fn deserialize<T: DeserializeOwned>(&self, data: &[u8]) -> Result<Option<T>> {
        if data.is_empty() {
            return Err(CodecError::NullHandlingViolation(
                "empty payload is not a valid null marker".to_string(),
            ));
        }

        bincode::deserialize(data).map_err(|e| CodecError::Deserialization(e.to_string()))
    }
}
