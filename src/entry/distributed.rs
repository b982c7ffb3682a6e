//! Copyright (c) 2025, Kirky.X
//!
//! MIT License
//!
//! 该模块定义了穿越分布式缓存层的条目包装类型。

use super::EntryMetadata;

/// 分布式缓存条目
///
/// 将业务值与时间戳、标签和可选元数据一起打包，
/// 作为分布式缓存层存取的最小单元。
///
/// 时间戳是调用方时钟定义的不透明刻度，序列化层只负责
/// 精确搬运，不做任何解释。`logical_expiration_timestamp`
/// 是否大于`timestamp`由上层缓存引擎保证，这里原样往返。
#[derive(Debug, Clone, PartialEq)]
pub struct DistributedEntry<V> {
    /// 业务值；`None`表示条目存在但值缺失，与条目本身缺失不同
    pub value: Option<V>,
    /// 条目创建时刻（不透明刻度）
    pub timestamp: i64,
    /// 条目的逻辑过期时刻（不透明刻度）
    pub logical_expiration_timestamp: i64,
    /// 条目关联的标签，可为空，顺序保持
    pub tags: Vec<String>,
    /// 扩展元数据，整体可选
    pub metadata: Option<EntryMetadata>,
}

impl<V> DistributedEntry<V> {
    /// 创建新的分布式缓存条目
    ///
    /// # 参数
    ///
    /// * `value` - 业务值，`None`表示值缺失
    /// * `timestamp` - 创建时刻
    /// * `logical_expiration_timestamp` - 逻辑过期时刻
    /// * `tags` - 条目标签
    /// * `metadata` - 扩展元数据
    pub fn new(
        value: Option<V>,
        timestamp: i64,
        logical_expiration_timestamp: i64,
        tags: Vec<String>,
        metadata: Option<EntryMetadata>,
    ) -> Self {
        Self {
            value,
            timestamp,
            logical_expiration_timestamp,
            tags,
            metadata,
        }
    }
}
