//! # 비동기 조회 규칙
//!
//! [`ReferenceDataPort`] 왕복이 필요한 규칙들입니다. 서로 독립적인 읽기이므로
//! 엔진이 동시에 실행할 수 있습니다.
//!
//! - [`EmailUniqueRule`]: 이미 저장된 이메일인지 (이메일 형식 체인이 통과한 경우에만 조회)
//! - [`GenderExistsRule`]: 성별 id가 존재하는지
//! - [`CountryCityRule`]: 국가가 존재하고, 도시가 그 국가에 속하는지 (복합 규칙)

use async_trait::async_trait;
use log::debug;

use super::AsyncRule;
use super::fields;
use crate::domain::dto::users::request::RegisterUserRequest;
use crate::validation::port::{PortError, ReferenceDataPort};
use crate::validation::result::ValidationError;

pub const EMAIL_NOT_UNIQUE: &str = "Email must be unique.";
pub const GENDER_NOT_FOUND: &str = "The specified Gender does not exist.";
pub const COUNTRY_NOT_FOUND: &str = "The selected country does not exist.";

/// 이메일 중복 검사
///
/// 잘못된 형식의 이메일로 불필요한 조회를 하지 않도록 `Email` 체인이 실패하면 건너뜁니다.
/// 이 검사는 권고 수준이며, 최종 보장은 저장소의 유니크 인덱스가 담당합니다.
pub struct EmailUniqueRule;

#[async_trait]
impl AsyncRule for EmailUniqueRule {
    fn field(&self) -> &'static str {
        fields::EMAIL
    }

    fn depends_on(&self) -> Option<&'static str> {
        Some(fields::EMAIL)
    }

    async fn validate(
        &self,
        request: &RegisterUserRequest,
        port: &dyn ReferenceDataPort,
    ) -> Result<Option<ValidationError>, PortError> {
        let taken = port.email_exists(&request.email).await?;

        Ok(taken.then(|| ValidationError::new(fields::EMAIL, EMAIL_NOT_UNIQUE)))
    }
}

/// 성별 존재 여부 검사
pub struct GenderExistsRule;

#[async_trait]
impl AsyncRule for GenderExistsRule {
    fn field(&self) -> &'static str {
        fields::GENDER_ID
    }

    async fn validate(
        &self,
        request: &RegisterUserRequest,
        port: &dyn ReferenceDataPort,
    ) -> Result<Option<ValidationError>, PortError> {
        let exists = port.gender_exists(request.gender_id).await?;

        Ok((!exists).then(|| ValidationError::new(fields::GENDER_ID, GENDER_NOT_FOUND)))
    }
}

/// 국가/도시 복합 규칙
///
/// 1. 국가를 소속 도시와 함께 조회
/// 2. 국가가 없으면 `CountryId` 에러를 보고하고 도시 검사는 생략
/// 3. 도시가 그 국가의 도시 목록에 없으면 `CityId` 에러 (메시지에 국가 이름 포함)
///
/// 한 번의 평가에서 최대 하나의 에러만 보고합니다.
pub struct CountryCityRule;

#[async_trait]
impl AsyncRule for CountryCityRule {
    fn field(&self) -> &'static str {
        fields::COUNTRY_ID
    }

    async fn validate(
        &self,
        request: &RegisterUserRequest,
        port: &dyn ReferenceDataPort,
    ) -> Result<Option<ValidationError>, PortError> {
        let Some(country) = port.find_country_with_cities(request.country_id).await? else {
            debug!("country {} not found, skipping city check", request.country_id);
            return Ok(Some(ValidationError::new(fields::COUNTRY_ID, COUNTRY_NOT_FOUND)));
        };

        if country.has_city(request.city_id) {
            return Ok(None);
        }

        Ok(Some(ValidationError::new(
            fields::CITY_ID,
            city_not_in_country(&country.country.name),
        )))
    }
}

pub fn city_not_in_country(country_name: &str) -> String {
    format!("The selected city does not belong to the country '{country_name}'.")
}
