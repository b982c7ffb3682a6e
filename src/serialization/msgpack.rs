//! Copyright (c) 2025-2026, Kirky.X
//!
//! MIT License
//!
//! 该模块定义了MessagePack序列化器的实现。

use super::Serializer;
use crate::error::{CodecError, Result};
use serde::{de::DeserializeOwned, Serialize};

/// MessagePack序列化器
///
/// 实现基于rmp-serde的序列化和反序列化，使用紧凑表示：
/// 结构体编码为定位数组，条目类型在此路径上使用Packed形态。
/// 空值编码为MessagePack的nil标记（0xc0）。
#[derive(Clone, Default)]
pub struct MessagePackSerializer;

impl MessagePackSerializer {
    /// 创建新的MessagePack序列化器
    pub fn new() -> Self {
        Self
    }
}

impl Serializer for MessagePackSerializer {
    /// 序列化可选值为MessagePack字节数组
    fn serialize<T: Serialize + Sync>(&self, value: Option<&T>) -> Result<Vec<u8>> {
        rmp_serde::to_vec(&value).map_err(|e| CodecError::Serialization(e.to_string()))
    }

    /// 从MessagePack字节数组反序列化可选值
    fn deserialize<T: DeserializeOwned>(&self, data: &[u8]) -> Result<Option<T>> {
        if data.is_empty() {
            return Err(CodecError::NullHandlingViolation(
                "empty payload is not a valid null marker".to_string(),
            ));
        }

        rmp_serde::from_slice(data).map_err(|e| CodecError::Deserialization(e.to_string()))
    }
}
