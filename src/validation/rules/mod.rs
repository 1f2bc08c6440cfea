//! # 검증 규칙
//!
//! 모든 규칙은 동일한 형태의 "validate" 능력을 노출하는 규칙 객체입니다.
//!
//! - [`SyncRule`]: 저장소 없이 요청만으로 판단하는 동기 규칙 (필드 체인, 교차 필드 규칙)
//! - [`AsyncRule`]: [`ReferenceDataPort`] 왕복이 필요한 비동기 규칙 (조회 규칙)
//!
//! 규칙은 실패 시 최대 하나의 [`ValidationError`]를 돌려줍니다.
//! 엔진은 정적으로 선언된 규칙 목록을 순회할 뿐, 실행 중에 체인을 조립하지 않습니다.

pub mod cross_field;
pub mod field;
pub mod lookup;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::dto::users::request::RegisterUserRequest;
use crate::validation::port::{PortError, ReferenceDataPort};
use crate::validation::result::ValidationError;

/// 필드 라벨 (실패 응답의 `Field` 값)
pub mod fields {
    pub const FIRST_NAME: &str = "FirstName";
    pub const LAST_NAME: &str = "LastName";
    pub const EMAIL: &str = "Email";
    pub const PASSWORD: &str = "Password";
    pub const PHONE_NUMBER: &str = "PhoneNumber";
    pub const ADDRESS: &str = "Address";
    pub const DATE_OF_BIRTH: &str = "DateOfBirth";
    pub const GENDER_ID: &str = "GenderId";
    pub const COUNTRY_ID: &str = "CountryId";
    pub const CITY_ID: &str = "CityId";
}

/// 한 번의 평가 동안 모든 규칙이 공유하는 값
#[derive(Debug, Clone, Copy)]
pub struct RuleContext {
    /// 나이/미래 날짜 판단의 기준일
    pub today: NaiveDate,
}

/// 동기 규칙
pub trait SyncRule: Send + Sync {
    /// 규칙이 귀속되는 필드 라벨 (객체 수준 규칙은 빈 문자열)
    fn field(&self) -> &'static str;

    fn validate(&self, request: &RegisterUserRequest, ctx: &RuleContext) -> Option<ValidationError>;
}

/// 비동기 조회 규칙
#[async_trait]
pub trait AsyncRule: Send + Sync {
    fn field(&self) -> &'static str;

    /// 이 필드의 동기 체인이 실패했다면 조회를 건너뜀
    fn depends_on(&self) -> Option<&'static str> {
        None
    }

    async fn validate(
        &self,
        request: &RegisterUserRequest,
        port: &dyn ReferenceDataPort,
    ) -> Result<Option<ValidationError>, PortError>;
}
