//! Copyright (c) 2025-2026, Kirky.X
//!
//! MIT License
//!
//! 该模块定义了条目类型与具体编码能力之间的桥接结构。
//!
//! 桥接结构分为两族：
//!
//! * **Named**：面向自描述格式（JSON）。字段使用单字母短名，
//!   取默认值的字段在输出中整体省略，解码端通过`default`还原，
//!   由此获得向前兼容的字段增减能力。时间以RFC 3339字符串承载。
//! * **Packed**：面向二进制定位格式（MessagePack、Bincode）。
//!   字段位置即线协议：每个字段始终在场，可选字段使用格式自身的
//!   在场标记，时间以i64 UTC微秒刻度承载。位置一经分配不再重排，
//!   新字段只能追加在末尾。
//!
//! 两族对规范类型是多对一映射，只在单次编解码调用内存活，
//! 不携带任何身份。选择哪一族由编解码器的`is_human_readable`
//! 标志在规范类型的serde实现内部自动决定。

use crate::entry::{DistributedEntry, EntryMetadata};
use crate::time::{instant_to_micros, micros_to_instant};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn is_false(v: &bool) -> bool {
    !*v
}

/// 元数据的Named编码形态（借用侧）
#[derive(Serialize)]
struct NamedMetadataRef<'a> {
    #[serde(rename = "f", skip_serializing_if = "is_false")]
    is_stale: bool,
    #[serde(rename = "e", skip_serializing_if = "Option::is_none")]
    eager_expiration: Option<DateTime<Utc>>,
    #[serde(rename = "t", skip_serializing_if = "Option::is_none")]
    etag: Option<&'a str>,
    #[serde(rename = "m", skip_serializing_if = "Option::is_none")]
    last_modified: Option<DateTime<Utc>>,
    #[serde(rename = "s", skip_serializing_if = "Option::is_none")]
    size: Option<i64>,
}

/// 元数据的Named解码形态（持有侧）
#[derive(Deserialize)]
struct NamedMetadata {
    #[serde(rename = "f", default)]
    is_stale: bool,
    #[serde(rename = "e", default)]
    eager_expiration: Option<DateTime<Utc>>,
    #[serde(rename = "t", default)]
    etag: Option<String>,
    #[serde(rename = "m", default)]
    last_modified: Option<DateTime<Utc>>,
    #[serde(rename = "s", default)]
    size: Option<i64>,
}

/// 元数据的Packed编码形态（借用侧）
///
/// 字段顺序即线协议，只能追加，不能重排
#[derive(Serialize)]
struct PackedMetadataRef<'a> {
    is_stale: bool,
    eager_expiration_ticks: Option<i64>,
    etag: Option<&'a str>,
    last_modified_ticks: Option<i64>,
    size: Option<i64>,
}

/// 元数据的Packed解码形态（持有侧）
#[derive(Deserialize)]
struct PackedMetadata {
    is_stale: bool,
    eager_expiration_ticks: Option<i64>,
    etag: Option<String>,
    last_modified_ticks: Option<i64>,
    size: Option<i64>,
}

impl<'a> From<&'a EntryMetadata> for NamedMetadataRef<'a> {
    fn from(meta: &'a EntryMetadata) -> Self {
        Self {
            is_stale: meta.is_stale,
            eager_expiration: meta.eager_expiration,
            etag: meta.etag.as_deref(),
            last_modified: meta.last_modified,
            size: meta.size,
        }
    }
}

impl From<NamedMetadata> for EntryMetadata {
    fn from(named: NamedMetadata) -> Self {
        Self {
            is_stale: named.is_stale,
            eager_expiration: named.eager_expiration,
            etag: named.etag,
            last_modified: named.last_modified,
            size: named.size,
        }
    }
}

impl<'a> From<&'a EntryMetadata> for PackedMetadataRef<'a> {
    fn from(meta: &'a EntryMetadata) -> Self {
        Self {
            is_stale: meta.is_stale,
            eager_expiration_ticks: meta.eager_expiration.map(instant_to_micros),
            etag: meta.etag.as_deref(),
            last_modified_ticks: meta.last_modified.map(instant_to_micros),
            size: meta.size,
        }
    }
}

impl TryFrom<PackedMetadata> for EntryMetadata {
    type Error = String;

    /// 从Packed形态还原元数据
    ///
    /// 刻度超出chrono可表示范围时返回错误，而不是悄悄截断
    fn try_from(packed: PackedMetadata) -> Result<Self, Self::Error> {
        let eager_expiration = packed
            .eager_expiration_ticks
            .map(|t| {
                micros_to_instant(t)
                    .ok_or_else(|| format!("eager expiration tick {} is out of range", t))
            })
            .transpose()?;
        let last_modified = packed
            .last_modified_ticks
            .map(|t| {
                micros_to_instant(t)
                    .ok_or_else(|| format!("last modified tick {} is out of range", t))
            })
            .transpose()?;

        Ok(Self {
            is_stale: packed.is_stale,
            eager_expiration,
            etag: packed.etag,
            last_modified,
            size: packed.size,
        })
    }
}

/// 条目的Named编码形态（借用侧）
#[derive(Serialize)]
struct NamedEntryRef<'a, V> {
    #[serde(rename = "v", skip_serializing_if = "Option::is_none")]
    value: Option<&'a V>,
    #[serde(rename = "t")]
    timestamp: i64,
    #[serde(rename = "l")]
    logical_expiration_timestamp: i64,
    #[serde(rename = "x", skip_serializing_if = "<[String]>::is_empty")]
    tags: &'a [String],
    #[serde(rename = "m", skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a EntryMetadata>,
}

/// 条目的Named解码形态（持有侧）
#[derive(Deserialize)]
#[serde(bound(deserialize = "V: Deserialize<'de>"))]
struct NamedEntry<V> {
    #[serde(rename = "v", default)]
    value: Option<V>,
    #[serde(rename = "t")]
    timestamp: i64,
    #[serde(rename = "l")]
    logical_expiration_timestamp: i64,
    #[serde(rename = "x", default)]
    tags: Vec<String>,
    #[serde(rename = "m", default)]
    metadata: Option<EntryMetadata>,
}

/// 条目的Packed编码形态（借用侧）
///
/// 字段顺序即线协议，只能追加，不能重排
#[derive(Serialize)]
struct PackedEntryRef<'a, V> {
    value: Option<&'a V>,
    timestamp: i64,
    logical_expiration_timestamp: i64,
    tags: &'a [String],
    metadata: Option<&'a EntryMetadata>,
}

/// 条目的Packed解码形态（持有侧）
#[derive(Deserialize)]
struct PackedEntry<V> {
    value: Option<V>,
    timestamp: i64,
    logical_expiration_timestamp: i64,
    tags: Vec<String>,
    metadata: Option<EntryMetadata>,
}

impl<'a, V> From<&'a DistributedEntry<V>> for NamedEntryRef<'a, V> {
    fn from(entry: &'a DistributedEntry<V>) -> Self {
        Self {
            value: entry.value.as_ref(),
            timestamp: entry.timestamp,
            logical_expiration_timestamp: entry.logical_expiration_timestamp,
            tags: &entry.tags,
            metadata: entry.metadata.as_ref(),
        }
    }
}

impl<V> From<NamedEntry<V>> for DistributedEntry<V> {
    fn from(named: NamedEntry<V>) -> Self {
        Self {
            value: named.value,
            timestamp: named.timestamp,
            logical_expiration_timestamp: named.logical_expiration_timestamp,
            tags: named.tags,
            metadata: named.metadata,
        }
    }
}

impl<'a, V> From<&'a DistributedEntry<V>> for PackedEntryRef<'a, V> {
    fn from(entry: &'a DistributedEntry<V>) -> Self {
        Self {
            value: entry.value.as_ref(),
            timestamp: entry.timestamp,
            logical_expiration_timestamp: entry.logical_expiration_timestamp,
            tags: &entry.tags,
            metadata: entry.metadata.as_ref(),
        }
    }
}

impl<V> From<PackedEntry<V>> for DistributedEntry<V> {
    fn from(packed: PackedEntry<V>) -> Self {
        Self {
            value: packed.value,
            timestamp: packed.timestamp,
            logical_expiration_timestamp: packed.logical_expiration_timestamp,
            tags: packed.tags,
            metadata: packed.metadata,
        }
    }
}

impl Serialize for EntryMetadata {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if serializer.is_human_readable() {
            NamedMetadataRef::from(self).serialize(serializer)
        } else {
            PackedMetadataRef::from(self).serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for EntryMetadata {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            Ok(NamedMetadata::deserialize(deserializer)?.into())
        } else {
            PackedMetadata::deserialize(deserializer)?
                .try_into()
                .map_err(serde::de::Error::custom)
        }
    }
}

impl<V: Serialize> Serialize for DistributedEntry<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if serializer.is_human_readable() {
            NamedEntryRef::from(self).serialize(serializer)
        } else {
            PackedEntryRef::from(self).serialize(serializer)
        }
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for DistributedEntry<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            Ok(NamedEntry::deserialize(deserializer)?.into())
        } else {
            Ok(PackedEntry::deserialize(deserializer)?.into())
        }
    }
}
