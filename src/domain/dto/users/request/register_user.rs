//! # 회원가입 요청 DTO
//!
//! 새 사용자 등록 요청의 JSON 구조를 정의합니다.
//! 키 이름은 PascalCase(`FirstName`, `DateOfBirth`, ...)를 그대로 사용합니다.
//!
//! ## 역직렬화 규칙
//!
//! 이 단계에서는 형식만 맞추고, 값의 유효성은 전부 [`validation`](crate::validation) 모듈이 판단합니다.
//! 그래서 대부분의 필드가 누락되어도 역직렬화는 성공하며, 누락된 값은 검증 에러로 보고됩니다.
//!
//! | 필드 | 누락/`null` 시 |
//! |------|----------------|
//! | 문자열 필드 | 빈 문자열 |
//! | `Address` | `None` (빈 문자열도 `None`, 그 외 값은 공백 포함 원문 유지) |
//! | `DateOfBirth` | `None` (`0001-01-01`도 `None`) |
//! | `GenderId`, `CountryId`, `CityId` | `0` |
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "FirstName": "John",
//!   "LastName": "Doe",
//!   "Email": "john@new.com",
//!   "Password": "Secure1",
//!   "ConfirmPassword": "Secure1",
//!   "DateOfBirth": "2000-01-01",
//!   "PhoneNumber": "1234567890",
//!   "GenderId": 1,
//!   "Address": "221B Baker Street",
//!   "CountryId": 1,
//!   "CityId": 1
//! }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::date_utils::deserialize_optional_date;
use crate::utils::string_utils::{deserialize_nullable_string, deserialize_optional_string};

/// 회원가입 요청
///
/// 식별자가 없으며 한 번의 검증 + 생성 작업 동안만 존재합니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RegisterUserRequest {
    #[serde(deserialize_with = "deserialize_nullable_string")]
    pub first_name: String,

    #[serde(deserialize_with = "deserialize_nullable_string")]
    pub last_name: String,

    #[serde(deserialize_with = "deserialize_nullable_string")]
    pub email: String,

    #[serde(deserialize_with = "deserialize_nullable_string")]
    pub password: String,

    #[serde(deserialize_with = "deserialize_nullable_string")]
    pub confirm_password: String,

    /// 생년월일 (미입력 시 `None`)
    #[serde(deserialize_with = "deserialize_optional_date")]
    pub date_of_birth: Option<NaiveDate>,

    #[serde(deserialize_with = "deserialize_nullable_string")]
    pub phone_number: String,

    pub gender_id: i32,

    /// 주소 (선택 사항)
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub address: Option<String>,

    pub country_id: i32,

    /// 반드시 `country_id` 국가에 속한 도시여야 함
    pub city_id: i32,
}
