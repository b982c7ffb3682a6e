//! oxentry - 分布式缓存条目序列化库
//!
//! 为需要穿越分布式缓存层的条目提供可插拔的序列化契约，
//! 同一份条目数据可以在JSON、MessagePack和Bincode等多种
//! 编码格式之间精确往返，并保证空值纪律和字段级向前兼容。

#![doc(html_root_url = "https://docs.rs/oxentry/0.1.0")]

pub use serde;
pub use serde::{Deserialize, Serialize};
pub use serde_json;
pub use tokio;

pub mod config;
pub mod entry;
pub mod error;
pub mod serialization;
pub mod time;

// Re-export commonly used items
pub use config::{SerializationConfig, SerializationFormat};
pub use entry::{DistributedEntry, EntryMetadata};
pub use error::{CodecError, Result};
pub use serialization::{
    BincodeSerializer, JsonSerializer, MessagePackSerializer, Serializer, SerializerEnum,
};

/// oxentry 版本号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
