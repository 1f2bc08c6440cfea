//! 참조 데이터 포트
//!
//! 검증 코어가 외부 저장소에 요구하는 유일한 인터페이스입니다.
//! 세 가지 읽기 전용 조회만 노출하며, 코어는 트랜잭션이나 변경 가능한 저장소 핸들을
//! 절대 보유하지 않습니다. 평가 호출마다 명시적으로 전달됩니다.
//!
//! ## 구현체
//!
//! - [`ReferenceRepository`](crate::repositories::reference::reference_repo::ReferenceRepository) - MongoDB (+ 선택적 Redis 캐시)
//! - [`InMemoryStore`](crate::repositories::memory::InMemoryStore) - 시드 데이터 기반 메모리 저장소

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 성별 참조 레코드
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gender {
    pub id: i32,
    pub name: String,
}

/// 도시 참조 레코드 (정확히 하나의 국가에 속함)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: i32,
    pub name: String,
    pub country_id: i32,
}

/// 국가 참조 레코드
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: i32,
    pub name: String,
}

/// 소속 도시 목록을 함께 조회한 국가
///
/// "도시 X가 국가 Y에 속하는가"에 대한 판단 기준입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryWithCities {
    pub country: Country,
    pub cities: Vec<City>,
}

impl CountryWithCities {
    pub fn has_city(&self, city_id: i32) -> bool {
        self.cities.iter().any(|city| city.id == city_id)
    }
}

/// 참조 데이터 포트 접근 실패
///
/// 검증 결과가 아니라 인프라 장애입니다. 에러 목록에 섞이지 않고 호출자에게 그대로 전파됩니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortError {
    /// 저장소에 연결할 수 없거나 조회가 실패함
    #[error("reference data unavailable: {0}")]
    Unavailable(String),

    /// 저장된 데이터를 해석할 수 없음
    #[error("reference data corrupted: {0}")]
    Corrupted(String),
}

/// 검증 코어가 사용하는 읽기 전용 조회 인터페이스
#[async_trait]
pub trait ReferenceDataPort: Send + Sync {
    /// 주어진 id의 성별이 존재하는지 확인
    async fn gender_exists(&self, id: i32) -> Result<bool, PortError>;

    /// 국가와 그 소속 도시 목록을 함께 조회 (없으면 `None`)
    async fn find_country_with_cities(&self, id: i32) -> Result<Option<CountryWithCities>, PortError>;

    /// 이미 저장된 사용자 중 같은 이메일이 있는지 확인
    ///
    /// 비교는 대소문자를 구분하지 않습니다 (모든 구현체 공통).
    async fn email_exists(&self, email: &str) -> Result<bool, PortError>;
}
