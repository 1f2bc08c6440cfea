use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::User;
use crate::validation::result::{ValidationError, ValidationResult};

/// 가입 성공 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserResponse {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub date_of_birth: NaiveDate,
    pub phone_number: String,
    pub address: Option<String>,
    pub gender_id: i32,
    pub country_id: i32,
    pub city_id: i32,
}

impl UserResponse {
    /// 저장된 사용자로부터 응답 생성
    ///
    /// `echo_password`가 false면 `Password` 키 자체가 응답에서 빠집니다.
    pub fn from_user(user: User, echo_password: bool) -> Self {
        let User {
            id,
            first_name,
            last_name,
            email,
            password,
            date_of_birth,
            phone_number,
            address,
            gender_id,
            country_id,
            city_id,
            ..
        } = user;

        Self {
            user_id: id.map(|id| id.to_hex()).unwrap_or_default(),
            first_name,
            last_name,
            email,
            password: echo_password.then_some(password),
            date_of_birth,
            phone_number,
            address,
            gender_id,
            country_id,
            city_id,
        }
    }
}

/// 검증 실패 응답 (`{"Errors": [{"Field": ..., "Error": ...}]}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValidationErrorResponse {
    pub errors: Vec<ValidationError>,
}

impl From<ValidationResult> for ValidationErrorResponse {
    fn from(result: ValidationResult) -> Self {
        Self {
            errors: result.into_errors(),
        }
    }
}
