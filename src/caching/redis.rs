//! # Redis 캐시 클라이언트 구현
//!
//! Redis를 백엔드로 하는 JSON 캐시 클라이언트입니다.
//! 값은 `serde_json`으로 직렬화되어 문자열로 저장됩니다.
//!
//! ## 연결 관리
//!
//! 시작 시 만든 [`ConnectionManager`] 하나를 모든 요청이 복제해서 씁니다.
//! 복제본은 같은 멀티플렉싱 연결을 공유하고, 연결이 끊기면 자동으로 재연결합니다.
//!
//! ## 에러 정책
//!
//! 캐시는 보조 저장소이므로 호출 측(리포지토리)은 캐시 에러를 무시하고
//! MongoDB 결과를 그대로 사용합니다.

use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use serde::{Serialize, de::DeserializeOwned};
use crate::config::CacheConfig;

#[derive(Clone)]
pub struct RedisClient {
    conn: ConnectionManager,
}

fn serde_failure(label: &'static str, e: serde_json::Error) -> redis::RedisError {
    redis::RedisError::from((redis::ErrorKind::TypeError, label, e.to_string()))
}

fn encode<T: Serialize>(value: &T) -> Result<String, redis::RedisError> {
    serde_json::to_string(value).map_err(|e| serde_failure("Serialization failed", e))
}

fn decode<T: DeserializeOwned>(value: Option<String>) -> Result<Option<T>, redis::RedisError> {
    value
        .map(|json| serde_json::from_str(&json).map_err(|e| serde_failure("Deserialization failed", e)))
        .transpose()
}

impl RedisClient {
    pub async fn new() -> Result<Self, redis::RedisError> {
        let client = Client::open(CacheConfig::redis_url())?;
        let mut conn = client.get_connection_manager().await?;

        // 연결 테스트 - PING 명령으로 서버 가용성 확인
        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        log::info!("✅ Redis 연결 성공");

        Ok(Self { conn })
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await?;
        decode(value)
    }

    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: usize) -> Result<(), redis::RedisError> {
        let json = encode(value)?;
        let mut conn = self.conn.clone();
        conn.set_ex(key, json, seconds as u64).await
    }

    pub async fn del(&self, key: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.conn.clone();
        conn.del(key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Cached {
        title: String,
        likes: i64,
    }

    #[test]
    fn test_missing_key_decodes_to_none() {
        let value: Option<Cached> = decode(None).unwrap();

        assert!(value.is_none());
    }

    #[test]
    fn test_cached_json_decodes() {
        let json = encode(&Cached { title: "Bibimbap".to_string(), likes: 3 }).unwrap();

        let value: Option<Cached> = decode(Some(json)).unwrap();

        assert_eq!(value, Some(Cached { title: "Bibimbap".to_string(), likes: 3 }));
    }

    #[test]
    fn test_corrupt_entry_is_type_error() {
        let err = decode::<Cached>(Some("{\"title\":".to_string())).unwrap_err();

        assert_eq!(err.kind(), redis::ErrorKind::TypeError);
    }
}
