//! User Entity Implementation
//!
//! 가입이 완료된 사용자 문서입니다. 검증을 통과한 요청에서만 생성됩니다.

use chrono::NaiveDate;
use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::domain::dto::users::request::RegisterUserRequest;

/// 사용자 엔티티
///
/// `users` 컬렉션과 1:1로 매핑됩니다. `email_normalized`에 유니크 인덱스가 걸려 있으며
/// 이메일 중복의 최종 보장은 이 인덱스가 담당합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub first_name: String,
    pub last_name: String,
    /// 사용자가 입력한 그대로의 이메일
    pub email: String,
    /// 중복 검사용 소문자 이메일 (unique)
    pub email_normalized: String,
    /// 평문 비밀번호 (해싱은 이 서비스의 범위 밖)
    pub password: String,
    pub date_of_birth: NaiveDate,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub gender_id: i32,
    pub country_id: i32,
    pub city_id: i32,
    /// 생성 시간
    pub created_at: DateTime,
}

impl User {
    /// 검증된 가입 요청으로부터 새 사용자 생성
    ///
    /// `date_of_birth`는 검증 단계에서 존재가 확인된 값을 넘겨받습니다.
    /// `ConfirmPassword`는 저장하지 않습니다.
    pub fn new_registered(request: RegisterUserRequest, date_of_birth: NaiveDate) -> Self {
        Self {
            id: None,
            first_name: request.first_name,
            last_name: request.last_name,
            email_normalized: normalize_email(&request.email),
            email: request.email,
            password: request.password,
            date_of_birth,
            phone_number: request.phone_number,
            address: request.address,
            gender_id: request.gender_id,
            country_id: request.country_id,
            city_id: request.city_id,
            created_at: DateTime::now(),
        }
    }

    /// ObjectId를 16진수 문자열로 반환
    pub fn id_string(&self) -> Option<String> {
        self.id.map(|id| id.to_hex())
    }
}

/// 이메일 비교용 정규화 (앞뒤 공백 제거, 소문자)
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email(" Pranaya.Rout@Example.COM "), "pranaya.rout@example.com");
    }

    #[test]
    fn test_new_registered_copies_request() {
        let request = RegisterUserRequest {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "John@New.com".to_string(),
            password: "Secure1".to_string(),
            confirm_password: "Secure1".to_string(),
            phone_number: "1234567890".to_string(),
            address: Some("1 Main St".to_string()),
            gender_id: 1,
            country_id: 1,
            city_id: 2,
            ..Default::default()
        };
        let dob = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();

        let user = User::new_registered(request, dob);

        assert!(user.id.is_none());
        assert_eq!(user.email, "John@New.com");
        assert_eq!(user.email_normalized, "john@new.com");
        assert_eq!(user.date_of_birth, dob);
        assert_eq!(user.address.as_deref(), Some("1 Main St"));
        assert_eq!(user.city_id, 2);
    }
}
