//! # Redis 캐시 클라이언트 구현
//!
//! Redis를 백엔드로 하는 JSON 캐시 클라이언트입니다.
//! 값은 `serde_json`으로 직렬화되어 문자열로 저장됩니다.
//!
//! ## 연결 관리
//!
//! [`ConnectionManager`]를 사용하여 단일 멀티플렉싱 연결을 공유하며,
//! 연결이 끊어지면 자동으로 재연결합니다.

use log::info;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use serde::{Serialize, de::DeserializeOwned};

#[derive(Clone)]
pub struct RedisClient {
    manager: ConnectionManager,
}

impl RedisClient {
    /// 주어진 URL로 연결하고 PING으로 가용성을 확인
    pub async fn connect(redis_url: &str) -> Result<Self, redis::RedisError> {
        let client = Client::open(redis_url)?;
        let mut manager = ConnectionManager::new(client).await?;

        redis::cmd("PING").query_async::<()>(&mut manager).await?;

        info!("✅ Redis 연결 성공");

        Ok(Self { manager })
    }

    /// 키에 저장된 JSON 값을 역직렬화하여 반환
    ///
    /// 키가 없으면 `Ok(None)`, 저장된 값이 `T`로 해석되지 않으면 `TypeError`를 돌려줍니다.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.manager.clone();
        let value: Option<String> = conn.get(key).await?;

        match value {
            Some(json) => {
                let deserialized = serde_json::from_str(&json)
                    .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Deserialization failed", e.to_string())))?;
                Ok(Some(deserialized))
            }
            None => Ok(None),
        }
    }

    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: u64) -> Result<(), redis::RedisError> {
        let mut conn = self.manager.clone();
        let json = serde_json::to_string(value)
            .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string())))?;
        conn.set_ex(key, json, seconds).await
    }
}
