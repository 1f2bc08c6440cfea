//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정은 환경 변수에서 읽으며, `PROFILE`에 따라 `.env.dev` / `.env.prod` 파일이 먼저 로드됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, Rate Limiting, 저장소, 검증, 응답 설정
//!
//! ## 환경 변수
//!
//! | 변수 | 기본값 | 설명 |
//! |------|--------|------|
//! | `ENVIRONMENT` | `production` | development / test / staging / production |
//! | `HOST`, `PORT` | `0.0.0.0`, `8080` | 바인딩 주소 |
//! | `RATE_LIMIT_PER_SECOND`, `RATE_LIMIT_BURST_SIZE` | 100, 200 | 요청 제한 |
//! | `STORAGE_BACKEND` | `mongo` | `mongo` 또는 `memory` |
//! | `MONGODB_URI`, `DATABASE_NAME` | `mongodb://localhost:27017`, `user_registration` | MongoDB |
//! | `REDIS_URL` | 없음 | 설정 시 참조 데이터 캐싱 |
//! | `REFERENCE_CACHE_TTL_SECONDS` | 600 | 캐시 TTL |
//! | `VALIDATION_TIMEOUT_MS` | 5000 | 검증 타임아웃 |
//! | `ECHO_PASSWORD` | dev/test: true, 그 외: false | 성공 응답에 비밀번호 포함 여부 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, StorageConfig};
//!
//! let env = Environment::current();
//! let address = ServerConfig::bind_address();
//! let backend = StorageConfig::backend();
//! ```

pub mod data_config;

pub use data_config::*;
