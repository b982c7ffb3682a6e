//! Copyright (c) 2025, Kirky.X
//!
//! MIT License
//!
//! 该模块实现了UTC时间点与i64微秒刻度之间的转换，供二进制编码路径使用。

use chrono::{DateTime, Utc};

/// 将UTC时间点转换为自Unix纪元起的微秒刻度
///
/// 二进制编码格式以固定偏移（UTC，偏移恒为零）存储时间，
/// 保证跨时区解码后比较相等
///
/// # 参数
///
/// * `at` - UTC时间点
///
/// # 返回值
///
/// 返回对应的微秒刻度，亚微秒精度被截断
#[inline]
pub fn instant_to_micros(at: DateTime<Utc>) -> i64 {
    at.timestamp_micros()
}

/// 将微秒刻度还原为UTC时间点
///
/// # 参数
///
/// * `ticks` - 自Unix纪元起的微秒刻度
///
/// # 返回值
///
/// 返回对应的UTC时间点；刻度超出chrono可表示范围时返回`None`
#[inline]
pub fn micros_to_instant(ticks: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_micros(ticks)
}
