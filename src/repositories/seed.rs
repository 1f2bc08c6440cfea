//! 초기 시드 데이터
//!
//! 참조 데이터(성별, 국가, 도시)와 예제 사용자 두 명입니다.
//! MongoDB 시딩과 메모리 저장소가 같은 데이터를 사용합니다.

use chrono::NaiveDate;

use crate::domain::dto::users::request::RegisterUserRequest;
use crate::domain::entities::reference::{CityDocument, CountryDocument, GenderDocument};
use crate::domain::entities::users::user::User;

pub fn genders() -> Vec<GenderDocument> {
    [(1, "Male"), (2, "Female"), (3, "Unknown")]
        .into_iter()
        .map(|(id, name)| GenderDocument { id, name: name.to_string() })
        .collect()
}

pub fn countries() -> Vec<CountryDocument> {
    [(1, "USA"), (2, "India")]
        .into_iter()
        .map(|(id, name)| CountryDocument { id, name: name.to_string() })
        .collect()
}

pub fn cities() -> Vec<CityDocument> {
    [(1, "New York", 1), (2, "Los Angeles", 1), (3, "Mumbai", 2), (4, "Delhi", 2)]
        .into_iter()
        .map(|(id, name, country_id)| CityDocument {
            id,
            name: name.to_string(),
            country_id,
        })
        .collect()
}

pub fn users() -> Vec<User> {
    vec![
        seed_user(
            RegisterUserRequest {
                first_name: "Pranaya".to_string(),
                last_name: "Rout".to_string(),
                email: "pranaya.rout@example.com".to_string(),
                password: "Secure@123".to_string(),
                phone_number: "9876543210".to_string(),
                address: Some("123, Main Street".to_string()),
                gender_id: 1,
                country_id: 2,
                city_id: 3,
                ..Default::default()
            },
            date(1990, 5, 20),
        ),
        seed_user(
            RegisterUserRequest {
                first_name: "Hina".to_string(),
                last_name: "Sharma".to_string(),
                email: "hina.sharma@example.com".to_string(),
                password: "StrongPass@123".to_string(),
                phone_number: "1234567890".to_string(),
                address: Some("456, Park Avenue".to_string()),
                gender_id: 2,
                country_id: 2,
                city_id: 4,
                ..Default::default()
            },
            date(1985, 8, 15),
        ),
    ]
}

fn seed_user(request: RegisterUserRequest, date_of_birth: NaiveDate) -> User {
    User::new_registered(request, date_of_birth)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
