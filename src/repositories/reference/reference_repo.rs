//! # 참조 데이터 리포지토리 구현
//!
//! 성별, 국가, 도시 조회와 이메일 존재 여부 조회를 MongoDB로 수행하는
//! [`ReferenceDataPort`] 구현체입니다.
//!
//! ## 캐싱 전략
//!
//! Redis가 설정된 경우 **존재하는** 국가/성별만 캐싱합니다.
//!
//! - **키 패턴**:
//!   - 국가(+도시 목록): `reference:country:{id}`
//!   - 성별: `reference:gender:{id}`
//! - **TTL**: `REFERENCE_CACHE_TTL_SECONDS` (기본 600초)
//! - 캐시 읽기/쓰기 실패는 무시하고 MongoDB 조회로 넘어갑니다.
//! - 이메일 존재 여부는 가입 직후 바로 바뀌므로 캐싱하지 않습니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, warn};
use mongodb::bson::{Document, doc};
use mongodb::error::ErrorKind;

use crate::caching::redis::RedisClient;
use crate::db::Database;
use crate::domain::entities::reference::{CityDocument, CountryDocument, GenderDocument};
use crate::domain::entities::users::user::normalize_email;
use crate::repositories::seed;
use crate::repositories::users::user_repo::USERS_COLLECTION;
use crate::validation::port::{CountryWithCities, Gender, PortError, ReferenceDataPort};

pub const GENDERS_COLLECTION: &str = "genders";
pub const COUNTRIES_COLLECTION: &str = "countries";
pub const CITIES_COLLECTION: &str = "cities";

/// 참조 데이터 액세스 리포지토리
///
/// ```rust,ignore
/// let repo = ReferenceRepository::new(database, Some(redis), 600);
/// repo.seed().await?;
///
/// let usa = repo.find_country_with_cities(1).await?;
/// ```
pub struct ReferenceRepository {
    db: Database,
    cache: Option<RedisClient>,
    cache_ttl_seconds: u64,
}

impl ReferenceRepository {
    pub fn new(db: Database, cache: Option<RedisClient>, cache_ttl_seconds: u64) -> Self {
        Self {
            db,
            cache,
            cache_ttl_seconds,
        }
    }

    /// 시드 참조 데이터를 upsert (여러 번 실행해도 결과가 같음)
    pub async fn seed(&self) -> Result<(), mongodb::error::Error> {
        let genders = self.db.collection::<GenderDocument>(GENDERS_COLLECTION);
        for gender in seed::genders() {
            genders
                .replace_one(doc! { "_id": gender.id }, &gender)
                .upsert(true)
                .await?;
        }

        let countries = self.db.collection::<CountryDocument>(COUNTRIES_COLLECTION);
        for country in seed::countries() {
            countries
                .replace_one(doc! { "_id": country.id }, &country)
                .upsert(true)
                .await?;
        }

        let cities = self.db.collection::<CityDocument>(CITIES_COLLECTION);
        for city in seed::cities() {
            cities
                .replace_one(doc! { "_id": city.id }, &city)
                .upsert(true)
                .await?;
        }

        debug!("reference data seeded");

        Ok(())
    }

    async fn cached<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let cache = self.cache.as_ref()?;

        match cache.get::<T>(key).await {
            Ok(value) => value,
            Err(e) => {
                warn!("cache read failed for {}: {}", key, e);
                None
            }
        }
    }

    async fn store_in_cache<T: serde::Serialize + Sync>(&self, key: &str, value: &T) {
        let Some(cache) = self.cache.as_ref() else {
            return;
        };

        if let Err(e) = cache.set_with_expiry(key, value, self.cache_ttl_seconds).await {
            warn!("cache write failed for {}: {}", key, e);
        }
    }
}

#[async_trait]
impl ReferenceDataPort for ReferenceRepository {
    async fn gender_exists(&self, gender_id: i32) -> Result<bool, PortError> {
        let key = gender_cache_key(gender_id);

        if self.cached::<Gender>(&key).await.is_some() {
            return Ok(true);
        }

        let gender = self
            .db
            .collection::<GenderDocument>(GENDERS_COLLECTION)
            .find_one(doc! { "_id": gender_id })
            .await
            .map_err(port_error)?;

        match gender {
            Some(gender) => {
                self.store_in_cache(&key, &Gender::from(gender)).await;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_country_with_cities(
        &self,
        country_id: i32,
    ) -> Result<Option<CountryWithCities>, PortError> {
        let key = country_cache_key(country_id);

        if let Some(cached) = self.cached::<CountryWithCities>(&key).await {
            return Ok(Some(cached));
        }

        let Some(country) = self
            .db
            .collection::<CountryDocument>(COUNTRIES_COLLECTION)
            .find_one(doc! { "_id": country_id })
            .await
            .map_err(port_error)?
        else {
            return Ok(None);
        };

        let cities: Vec<CityDocument> = self
            .db
            .collection::<CityDocument>(CITIES_COLLECTION)
            .find(doc! { "country_id": country_id })
            .await
            .map_err(port_error)?
            .try_collect()
            .await
            .map_err(port_error)?;

        let found = CountryWithCities {
            country: country.into(),
            cities: cities.into_iter().map(Into::into).collect(),
        };

        self.store_in_cache(&key, &found).await;

        Ok(Some(found))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, PortError> {
        let count = self
            .db
            .collection::<Document>(USERS_COLLECTION)
            .count_documents(doc! { "email_normalized": normalize_email(email) })
            .await
            .map_err(port_error)?;

        Ok(count > 0)
    }
}

pub fn country_cache_key(country_id: i32) -> String {
    format!("reference:country:{}", country_id)
}

pub fn gender_cache_key(gender_id: i32) -> String {
    format!("reference:gender:{}", gender_id)
}

/// MongoDB 에러를 포트 에러로 변환 (문서 해석 실패는 데이터 손상으로 분류)
fn port_error(e: mongodb::error::Error) -> PortError {
    match *e.kind {
        ErrorKind::BsonDeserialization(_) => PortError::Corrupted(e.to_string()),
        _ => PortError::Unavailable(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_keys() {
        assert_eq!(country_cache_key(1), "reference:country:1");
        assert_eq!(gender_cache_key(3), "reference:gender:3");
    }
}
