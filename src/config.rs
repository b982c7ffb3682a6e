//! Copyright (c) 2025, Kirky.X
//!
//! MIT License
//!
//! 该模块定义了序列化层的配置结构和解析逻辑。

use crate::error::{CodecError, Result};
use crate::serialization::{
    BincodeSerializer, JsonSerializer, MessagePackSerializer, SerializerEnum,
};
use serde::Deserialize;
use std::path::Path;
use tracing::instrument;

pub const CONFIG_VERSION: u32 = 1;

/// 序列化格式枚举
///
/// 支持JSON、MessagePack和Bincode三种序列化格式
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SerializationFormat {
    /// JSON序列化
    #[default]
    Json,
    /// MessagePack序列化
    MessagePack,
    /// Bincode序列化
    Bincode,
}

/// 序列化配置
///
/// 定义条目编解码使用的格式及其选项
#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct SerializationConfig {
    /// 配置文件版本
    pub config_version: Option<u32>,
    /// 序列化格式
    pub format: SerializationFormat,
    /// 是否启用压缩（仅JSON格式支持）
    pub compress: bool,
}

impl Default for SerializationConfig {
    fn default() -> Self {
        Self {
            config_version: None,
            format: SerializationFormat::Json,
            compress: false,
        }
    }
}

impl SerializationConfig {
    /// 从TOML文件加载配置
    ///
    /// # 参数
    ///
    /// * `path` - 配置文件路径
    ///
    /// # 返回值
    ///
    /// 返回解析并通过验证的配置，文件不可读或内容非法时返回错误
    #[instrument(level = "debug")]
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| CodecError::ConfigError(e.to_string()))?;
        config.validate().map_err(CodecError::ConfigError)?;
        Ok(config)
    }

    /// 验证配置
    ///
    /// 检查配置的有效性，确保选项组合受支持
    pub fn validate(&self) -> std::result::Result<(), String> {
        // 验证配置版本
        if let Some(version) = &self.config_version {
            if *version > CONFIG_VERSION {
                return Err(format!(
                    "Configuration version {} is not supported. Current version is {}.",
                    version, CONFIG_VERSION
                ));
            }
        }

        // 压缩目前只在JSON路径上实现
        if self.compress && self.format != SerializationFormat::Json {
            return Err(format!(
                "Compression is only supported for the json format, not {:?}",
                self.format
            ));
        }

        Ok(())
    }

    /// 根据配置构建序列化器
    ///
    /// # 返回值
    ///
    /// 返回配置所指定格式的序列化器实例
    pub fn build_serializer(&self) -> SerializerEnum {
        match self.format {
            SerializationFormat::Json => {
                if self.compress {
                    SerializerEnum::Json(JsonSerializer::with_compression())
                } else {
                    SerializerEnum::Json(JsonSerializer::new())
                }
            }
            SerializationFormat::MessagePack => {
                SerializerEnum::MessagePack(MessagePackSerializer::new())
            }
            SerializationFormat::Bincode => SerializerEnum::Bincode(BincodeSerializer::new()),
        }
    }
}
