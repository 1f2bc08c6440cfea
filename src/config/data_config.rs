//! 데이터 및 서버 설정 관리 모듈
//!
//! 서버, 저장소, 검증, 응답 관련 설정을 환경 변수에서 읽어옵니다.
//! 값이 없거나 파싱에 실패하면 기본값을 사용합니다.

use std::env;
use std::time::Duration;

use log::error;

/// 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수 기준 현재 환경 (기본값: production)
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// Rate Limiting 설정 (actix-governor)
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn load() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        Self {
            per_second,
            burst_size,
        }
    }
}

/// 저장소 백엔드 종류
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StorageBackend {
    /// MongoDB (+ `REDIS_URL`이 있으면 Redis 캐시)
    Mongo,
    /// 시드 데이터를 가진 메모리 저장소
    Memory,
}

impl StorageBackend {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StorageBackend::Memory,
            _ => StorageBackend::Mongo,
        }
    }
}

pub struct StorageConfig;

impl StorageConfig {
    pub fn backend() -> StorageBackend {
        StorageBackend::from_str(&env::var("STORAGE_BACKEND").unwrap_or_else(|_| "mongo".to_string()))
    }

    pub fn mongodb_uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "user_registration".to_string())
    }

    /// Redis 캐시 URL (설정되지 않으면 캐시 없이 동작)
    pub fn redis_url() -> Option<String> {
        env::var("REDIS_URL").ok().filter(|url| !url.trim().is_empty())
    }

    /// 참조 데이터 캐시 TTL (초)
    pub fn reference_cache_ttl_seconds() -> u64 {
        env::var("REFERENCE_CACHE_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(600)
    }
}

pub struct ValidationConfig;

impl ValidationConfig {
    /// 한 번의 검증 평가에 허용되는 시간
    pub fn timeout() -> Duration {
        let millis = env::var("VALIDATION_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5000);

        Duration::from_millis(millis)
    }
}

pub struct ResponseConfig;

impl ResponseConfig {
    /// 가입 성공 응답에 비밀번호를 포함할지 여부
    ///
    /// `ECHO_PASSWORD`가 명시되면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn echo_password() -> bool {
        match env::var("ECHO_PASSWORD") {
            Ok(value) => parse_flag(&value).unwrap_or_else(|| {
                error!("ECHO_PASSWORD 파싱 실패: {}. 환경 기본값 사용", value);
                Self::echo_password_for_env(&Environment::current())
            }),
            Err(_) => Self::echo_password_for_env(&Environment::current()),
        }
    }

    pub fn echo_password_for_env(env: &Environment) -> bool {
        match env {
            Environment::Development => true,
            Environment::Test => true,
            Environment::Staging => false,
            Environment::Production => false,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_echo_password_for_each_environment() {
        assert!(ResponseConfig::echo_password_for_env(&Environment::Development));
        assert!(ResponseConfig::echo_password_for_env(&Environment::Test));
        assert!(!ResponseConfig::echo_password_for_env(&Environment::Staging));
        assert!(!ResponseConfig::echo_password_for_env(&Environment::Production));
    }

    #[test]
    fn test_storage_backend_from_string() {
        assert_eq!(StorageBackend::from_str("memory"), StorageBackend::Memory);
        assert_eq!(StorageBackend::from_str("MEMORY"), StorageBackend::Memory);
        assert_eq!(StorageBackend::from_str("mongo"), StorageBackend::Mongo);
        assert_eq!(StorageBackend::from_str(""), StorageBackend::Mongo);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }

        if env::var("DATABASE_NAME").is_err() {
            assert_eq!(StorageConfig::database_name(), "user_registration");
        }

        if env::var("VALIDATION_TIMEOUT_MS").is_err() {
            assert_eq!(ValidationConfig::timeout(), Duration::from_millis(5000));
        }
    }
}
