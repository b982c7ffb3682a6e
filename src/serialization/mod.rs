//! Copyright (c) 2025-2026, Kirky.X
//!
//! MIT License
//!
//! 该模块定义了缓存条目的序列化契约，支持多种编码格式。
//!
//! 契约的核心是空值纪律：`serialize(None)`编码为目标格式自身的
//! 空值标记，解码端遇到该标记返回`Ok(None)`。值缺失与数据损坏
//! 因此永远可以区分，缺失不会被猜测成默认值。

pub mod bincode;
pub mod json;
pub mod msgpack;
mod surrogate;

use crate::error::Result;
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

pub use self::bincode::BincodeSerializer;
pub use self::json::JsonSerializer;
pub use self::msgpack::MessagePackSerializer;

/// 序列化器特征
///
/// 定义序列化和反序列化操作的接口。实现必须无共享可变状态，
/// 同一实例可以被并发使用。
#[async_trait]
pub trait Serializer: Send + Sync {
    /// 序列化可选值为字节数组
    ///
    /// # 参数
    ///
    /// * `value` - 要序列化的值；`None`编码为格式的空值标记，永不失败
    ///
    /// # 返回值
    ///
    /// 返回序列化后的字节数组或错误
    fn serialize<T: Serialize + Sync>(&self, value: Option<&T>) -> Result<Vec<u8>>;

    /// 从字节数组反序列化可选值
    ///
    /// # 参数
    ///
    /// * `data` - 要反序列化的字节数组；空值标记解码为`None`，
    ///   长度为零的输入视为空值纪律违规
    ///
    /// # 返回值
    ///
    /// 返回反序列化后的值或错误
    fn deserialize<T: DeserializeOwned>(&self, data: &[u8]) -> Result<Option<T>>;

    /// `serialize`的异步形式
    ///
    /// 内置后端都是纯CPU编码，默认实现直接委托同步形式，
    /// 结果与同步调用字节一致
    async fn serialize_async<T: Serialize + Sync>(&self, value: Option<&T>) -> Result<Vec<u8>> {
        self.serialize(value)
    }

    /// `deserialize`的异步形式
    ///
    /// 默认实现直接委托同步形式，结果与同步调用一致
    async fn deserialize_async<T: DeserializeOwned + Send>(
        &self,
        data: &[u8],
    ) -> Result<Option<T>> {
        self.deserialize(data)
    }
}

/// 序列化器枚举
///
/// 用于支持 trait object 的序列化器
#[derive(Clone)]
pub enum SerializerEnum {
    Json(JsonSerializer),
    MessagePack(MessagePackSerializer),
    Bincode(BincodeSerializer),
}

impl Serializer for SerializerEnum {
    fn serialize<T: Serialize + Sync>(&self, value: Option<&T>) -> Result<Vec<u8>> {
        match self {
            SerializerEnum::Json(s) => s.serialize(value),
            SerializerEnum::MessagePack(s) => s.serialize(value),
            SerializerEnum::Bincode(s) => s.serialize(value),
        }
    }

    fn deserialize<T: DeserializeOwned>(&self, data: &[u8]) -> Result<Option<T>> {
        match self {
            SerializerEnum::Json(s) => s.deserialize(data),
            SerializerEnum::MessagePack(s) => s.deserialize(data),
            SerializerEnum::Bincode(s) => s.deserialize(data),
        }
    }
}
