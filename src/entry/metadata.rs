//! Copyright (c) 2025, Kirky.X
//!
//! MIT License
//!
//! 该模块定义了缓存条目的扩展元数据。

use chrono::{DateTime, Utc};

/// 缓存条目元数据
///
/// 记录条目的新鲜度与来源信息。每个字段都独立可选，
/// 缺失的字段在任何编码格式下往返后仍然缺失，不会被替换为零值。
/// 实例一经构造即不可变。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryMetadata {
    /// 值是否来自故障保护（stale）回退
    pub is_stale: bool,
    /// 预期的提前刷新时间点
    pub eager_expiration: Option<DateTime<Utc>>,
    /// 条目的ETag，用于条件刷新
    pub etag: Option<String>,
    /// 源数据的最后修改时间点
    pub last_modified: Option<DateTime<Utc>>,
    /// 条目的逻辑大小（字节）
    pub size: Option<i64>,
}

impl EntryMetadata {
    /// 创建新的条目元数据
    ///
    /// # 参数
    ///
    /// * `is_stale` - 值是否来自故障保护回退
    /// * `eager_expiration` - 预期的提前刷新时间点
    /// * `etag` - 条目的ETag
    /// * `last_modified` - 源数据的最后修改时间点
    /// * `size` - 条目的逻辑大小（字节）
    pub fn new(
        is_stale: bool,
        eager_expiration: Option<DateTime<Utc>>,
        etag: Option<String>,
        last_modified: Option<DateTime<Utc>>,
        size: Option<i64>,
    ) -> Self {
        Self {
            is_stale,
            eager_expiration,
            etag,
            last_modified,
            size,
        }
    }

    /// 判断元数据是否不携带任何信息
    ///
    /// # 返回值
    ///
    /// 所有字段均为默认值时返回`true`
    pub fn is_empty(&self) -> bool {
        !self.is_stale
            && self.eager_expiration.is_none()
            && self.etag.is_none()
            && self.last_modified.is_none()
            && self.size.is_none()
    }
}
