//! Copyright (c) 2025, Kirky.X
//!
//! MIT License
//!
//! 跨格式往返集成测试

use chrono::{TimeZone, Utc};
use oxentry::entry::{DistributedEntry, EntryMetadata};
use oxentry::serialization::{
    bincode::BincodeSerializer, json::JsonSerializer, msgpack::MessagePackSerializer, Serializer,
    SerializerEnum,
};
use oxentry::time::instant_to_micros;
use rand::RngCore;

#[path = "../common/mod.rs"]
mod common;

use common::ComplexPayload;

fn primary_serializers() -> Vec<(&'static str, SerializerEnum)> {
    vec![
        ("json", SerializerEnum::Json(JsonSerializer::new())),
        (
            "messagepack",
            SerializerEnum::MessagePack(MessagePackSerializer::new()),
        ),
        ("bincode", SerializerEnum::Bincode(BincodeSerializer::new())),
    ]
}

/// 测试大规模同质序列的往返
///
/// 1,048,576个复合元素在每个后端上都必须逐元素精确还原
#[test]
fn test_large_sequence_round_trip() {
    common::setup_logging();

    let payload: Vec<ComplexPayload> = (0..1_048_576u64).map(ComplexPayload::sample).collect();

    for (name, serializer) in primary_serializers() {
        let bytes = serializer
            .serialize(Some(&payload))
            .unwrap_or_else(|e| panic!("backend {} failed to serialize: {}", name, e));
        let decoded: Vec<ComplexPayload> = serializer
            .deserialize(&bytes)
            .unwrap_or_else(|e| panic!("backend {} failed to deserialize: {}", name, e))
            .expect("present sequence decoded as None");

        assert_eq!(decoded.len(), payload.len(), "backend: {}", name);
        assert_eq!(decoded[0], payload[0], "backend: {}", name);
        assert_eq!(
            decoded[payload.len() - 1],
            payload[payload.len() - 1],
            "backend: {}",
            name
        );
        assert!(
            decoded == payload,
            "backend {} corrupted the sequence",
            name
        );
    }
}

/// 测试时间点的跨时区不变性
///
/// 带非零偏移写出的时间解码后与对应的UTC时间点相等；
/// 二进制路径上的比较基于微秒刻度而不是字符串
#[test]
fn test_time_zone_invariance() {
    common::setup_logging();

    // JSON路径：携带+02:00偏移的线数据解码后归一化到UTC
    let json = JsonSerializer::new();
    let wire = br#"{"m":"2024-06-15T12:30:45.500+02:00"}"#;
    let decoded: EntryMetadata = json.deserialize(wire).unwrap().unwrap();
    let expected = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 45).unwrap()
        + chrono::Duration::milliseconds(500);
    assert_eq!(decoded.last_modified, Some(expected));

    // 二进制路径：刻度相等即时间点相等
    let meta = EntryMetadata::new(false, None, None, Some(expected), None);
    for serializer in [
        SerializerEnum::MessagePack(MessagePackSerializer::new()),
        SerializerEnum::Bincode(BincodeSerializer::new()),
    ] {
        let bytes = serializer.serialize(Some(&meta)).unwrap();
        let restored: EntryMetadata = serializer.deserialize(&bytes).unwrap().unwrap();
        let restored_at = restored.last_modified.unwrap();
        assert_eq!(
            instant_to_micros(restored_at),
            instant_to_micros(expected)
        );
        assert_eq!(restored_at, expected);
    }
}

/// 测试随机字节载荷的透传
///
/// 任意内容的字节数组在每个后端上都必须精确还原
#[test]
fn test_random_byte_passthrough() {
    common::setup_logging();

    let mut rng = rand::thread_rng();
    let mut payload = vec![0u8; 1000];
    rng.fill_bytes(&mut payload);

    for (name, serializer) in primary_serializers() {
        let bytes = serializer.serialize(Some(&payload)).unwrap();
        assert!(
            bytes.len() > payload.len(),
            "backend {} produced no framing overhead",
            name
        );
        let decoded: Option<Vec<u8>> = serializer.deserialize(&bytes).unwrap();
        assert_eq!(decoded.as_ref(), Some(&payload), "backend: {}", name);
    }
}

/// 测试序列化器实例的无状态复用
///
/// 同一实例交替处理不同类型时，输出只取决于输入
#[test]
fn test_stateless_reuse_across_types() {
    common::setup_logging();

    let entry = DistributedEntry::new(
        Some(ComplexPayload::sample(5)),
        1_000,
        2_000,
        vec!["reuse".to_string()],
        Some(EntryMetadata::new(true, None, None, None, Some(64))),
    );
    let raw = vec![7u8; 32];
    let text = "interleaved".to_string();

    for (name, serializer) in primary_serializers() {
        let first_entry = serializer.serialize(Some(&entry)).unwrap();
        let first_raw = serializer.serialize(Some(&raw)).unwrap();
        let first_text = serializer.serialize(Some(&text)).unwrap();

        // 交替十轮后输出必须与第一轮完全一致
        for _ in 0..10 {
            assert_eq!(
                serializer.serialize(Some(&raw)).unwrap(),
                first_raw,
                "backend: {}",
                name
            );
            assert_eq!(
                serializer.serialize(Some(&entry)).unwrap(),
                first_entry,
                "backend: {}",
                name
            );
            assert_eq!(
                serializer.serialize(Some(&text)).unwrap(),
                first_text,
                "backend: {}",
                name
            );
        }

        let decoded: DistributedEntry<ComplexPayload> =
            serializer.deserialize(&first_entry).unwrap().unwrap();
        assert_eq!(decoded, entry, "backend: {}", name);
    }
}
