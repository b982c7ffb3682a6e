//! Copyright (c) 2025, Kirky.X
//!
//! MIT License
//!
//! 该模块定义了分布式缓存条目的规范数据模型。
//!
//! 这里的类型是所有编码格式必须精确还原的稳定形态，
//! 与任何具体编码技术无关。

pub mod distributed;
pub mod metadata;

pub use distributed::DistributedEntry;
pub use metadata::EntryMetadata;
