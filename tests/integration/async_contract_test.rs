//! Copyright (c) 2025, Kirky.X
//!
//! MIT License
//!
//! 异步契约集成测试

use oxentry::entry::DistributedEntry;
use oxentry::serialization::{
    bincode::BincodeSerializer, json::JsonSerializer, msgpack::MessagePackSerializer, Serializer,
    SerializerEnum,
};
use std::sync::Arc;

#[path = "../common/mod.rs"]
mod common;

use common::ComplexPayload;

fn all_serializers() -> Vec<(&'static str, SerializerEnum)> {
    vec![
        ("json", SerializerEnum::Json(JsonSerializer::new())),
        (
            "json+gzip",
            SerializerEnum::Json(JsonSerializer::with_compression()),
        ),
        (
            "messagepack",
            SerializerEnum::MessagePack(MessagePackSerializer::new()),
        ),
        ("bincode", SerializerEnum::Bincode(BincodeSerializer::new())),
    ]
}

/// 测试异步形式与同步形式的结果一致性
///
/// 两种调用形式对相同输入必须产生相同的字节和相同的解码结果
#[tokio::test]
async fn test_async_matches_sync() {
    common::setup_logging();

    let payload = ComplexPayload::sample(42);

    for (name, serializer) in all_serializers() {
        let sync_bytes = serializer.serialize(Some(&payload)).unwrap();
        let async_bytes = serializer.serialize_async(Some(&payload)).await.unwrap();
        assert_eq!(sync_bytes, async_bytes, "backend: {}", name);

        let sync_decoded: Option<ComplexPayload> = serializer.deserialize(&sync_bytes).unwrap();
        let async_decoded: Option<ComplexPayload> =
            serializer.deserialize_async(&sync_bytes).await.unwrap();
        assert_eq!(sync_decoded, async_decoded, "backend: {}", name);
    }
}

/// 测试异步路径上的空值往返
#[tokio::test]
async fn test_async_null_round_trip() {
    common::setup_logging();

    for (name, serializer) in all_serializers() {
        let bytes = serializer
            .serialize_async(None::<&ComplexPayload>)
            .await
            .unwrap();
        let decoded: Option<ComplexPayload> =
            serializer.deserialize_async(&bytes).await.unwrap();
        assert_eq!(decoded, None, "backend: {}", name);
    }
}

/// 测试共享实例上的并发往返
///
/// 序列化器无共享可变状态，并发使用时各任务的结果互不干扰
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_round_trips() {
    common::setup_logging();

    for (name, serializer) in all_serializers() {
        let serializer = Arc::new(serializer);
        let mut handles = Vec::new();

        for task_id in 0..16u64 {
            let serializer = Arc::clone(&serializer);
            handles.push(tokio::spawn(async move {
                for i in 0..50u64 {
                    let seed = task_id * 1_000 + i;
                    let entry = DistributedEntry::new(
                        Some(ComplexPayload::sample(seed)),
                        seed as i64,
                        seed as i64 + 60,
                        vec![format!("task_{}", task_id)],
                        None,
                    );

                    let bytes = serializer
                        .serialize_async(Some(&entry))
                        .await
                        .expect("serialize failed");
                    let decoded: DistributedEntry<ComplexPayload> = serializer
                        .deserialize_async(&bytes)
                        .await
                        .expect("deserialize failed")
                        .expect("present entry decoded as None");

                    assert_eq!(decoded, entry);
                }
            }));
        }

        for handle in handles {
            handle
                .await
                .unwrap_or_else(|e| panic!("backend {} task panicked: {}", name, e));
        }
    }
}
