//! 캐싱 계층 모듈
//!
//! 참조 데이터(국가, 성별) 조회 결과를 Redis에 캐싱합니다.
//! 캐시는 선택 사항이며, 캐시 장애는 조회 실패로 이어지지 않습니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let cache = RedisClient::connect("redis://localhost:6379").await?;
//! cache.set_with_expiry("reference:country:1", &country, 600).await?;
//!
//! let cached: Option<CountryWithCities> = cache.get("reference:country:1").await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 설정하지 않으면 캐시 비활성화
//! REFERENCE_CACHE_TTL_SECONDS=600
//! ```

pub mod redis;
