//! 참조 데이터 문서
//!
//! `genders`, `countries`, `cities` 컬렉션의 MongoDB 문서 구조입니다.
//! 검증 코어는 이 타입을 직접 보지 않고 [`crate::validation::port`]의 값 타입으로 변환해서 사용합니다.

use serde::{Deserialize, Serialize};

use crate::validation::port::{City, Country, Gender};

/// `genders` 컬렉션 문서
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderDocument {
    #[serde(rename = "_id")]
    pub id: i32,
    pub name: String,
}

/// `countries` 컬렉션 문서
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryDocument {
    #[serde(rename = "_id")]
    pub id: i32,
    pub name: String,
}

/// `cities` 컬렉션 문서
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityDocument {
    #[serde(rename = "_id")]
    pub id: i32,
    pub name: String,
    pub country_id: i32,
}

impl From<GenderDocument> for Gender {
    fn from(doc: GenderDocument) -> Self {
        Self { id: doc.id, name: doc.name }
    }
}

impl From<CountryDocument> for Country {
    fn from(doc: CountryDocument) -> Self {
        Self { id: doc.id, name: doc.name }
    }
}

impl From<CityDocument> for City {
    fn from(doc: CityDocument) -> Self {
        Self {
            id: doc.id,
            name: doc.name,
            country_id: doc.country_id,
        }
    }
}
