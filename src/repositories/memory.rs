//! 메모리 저장소
//!
//! 시드 데이터를 메모리에 올려두고 [`ReferenceDataPort`]와 [`UserStore`]를 모두 구현합니다.
//! `STORAGE_BACKEND=memory`로 실행하거나 테스트에서 사용합니다. 프로세스가 끝나면 데이터는 사라집니다.

use std::sync::RwLock;

use async_trait::async_trait;
use log::debug;
use mongodb::bson::oid::ObjectId;

use super::seed;
use super::{StoreError, UserStore};
use crate::domain::entities::users::user::{User, normalize_email};
use crate::validation::port::{
    City, Country, CountryWithCities, Gender, PortError, ReferenceDataPort,
};

pub struct InMemoryStore {
    genders: Vec<Gender>,
    countries: Vec<Country>,
    cities: Vec<City>,
    users: RwLock<Vec<User>>,
}

impl InMemoryStore {
    pub fn new(genders: Vec<Gender>, countries: Vec<Country>, cities: Vec<City>) -> Self {
        Self {
            genders,
            countries,
            cities,
            users: RwLock::new(Vec::new()),
        }
    }

    /// 참조 데이터와 예제 사용자가 채워진 저장소
    pub fn seeded() -> Self {
        let users = seed::users()
            .into_iter()
            .map(|mut user| {
                user.id = Some(ObjectId::new());
                user
            })
            .collect();

        Self {
            genders: seed::genders().into_iter().map(Gender::from).collect(),
            countries: seed::countries().into_iter().map(Country::from).collect(),
            cities: seed::cities().into_iter().map(City::from).collect(),
            users: RwLock::new(users),
        }
    }

    /// 저장된 사용자 수
    pub fn user_count(&self) -> Result<usize, StoreError> {
        let users = self
            .users
            .read()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(users.len())
    }
}

#[async_trait]
impl ReferenceDataPort for InMemoryStore {
    async fn gender_exists(&self, gender_id: i32) -> Result<bool, PortError> {
        Ok(self.genders.iter().any(|gender| gender.id == gender_id))
    }

    async fn find_country_with_cities(
        &self,
        country_id: i32,
    ) -> Result<Option<CountryWithCities>, PortError> {
        let Some(country) = self.countries.iter().find(|country| country.id == country_id) else {
            return Ok(None);
        };

        let cities = self
            .cities
            .iter()
            .filter(|city| city.country_id == country_id)
            .cloned()
            .collect();

        Ok(Some(CountryWithCities {
            country: country.clone(),
            cities,
        }))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, PortError> {
        let normalized = normalize_email(email);
        let users = self
            .users
            .read()
            .map_err(|e| PortError::Unavailable(e.to_string()))?;

        Ok(users.iter().any(|user| user.email_normalized == normalized))
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn create_user(&self, mut user: User) -> Result<User, StoreError> {
        let mut users = self
            .users
            .write()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        if users.iter().any(|existing| existing.email_normalized == user.email_normalized) {
            return Err(StoreError::DuplicateEmail);
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());

        debug!("user stored in memory ({} total)", users.len());

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::users::request::RegisterUserRequest;
    use chrono::NaiveDate;

    fn new_user(email: &str) -> User {
        let request = RegisterUserRequest {
            first_name: "John".to_string(),
            email: email.to_string(),
            ..Default::default()
        };
        User::new_registered(request, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap())
    }

    #[actix_web::test]
    async fn test_seeded_reference_data() {
        let store = InMemoryStore::seeded();

        assert!(store.gender_exists(3).await.unwrap());
        assert!(!store.gender_exists(4).await.unwrap());

        let india = store.find_country_with_cities(2).await.unwrap().unwrap();
        assert_eq!(india.country.name, "India");
        assert_eq!(
            india.cities.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            vec!["Mumbai", "Delhi"]
        );

        assert!(store.find_country_with_cities(3).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_create_user_assigns_id() {
        let store = InMemoryStore::seeded();

        let saved = store.create_user(new_user("john@new.com")).await.unwrap();

        assert!(saved.id.is_some());
        assert_eq!(store.user_count().unwrap(), 3);
        assert!(store.email_exists("JOHN@new.com").await.unwrap());
    }

    #[actix_web::test]
    async fn test_duplicate_email_rejected_case_insensitively() {
        let store = InMemoryStore::seeded();

        let outcome = store.create_user(new_user("Hina.Sharma@Example.com")).await;

        assert_eq!(outcome, Err(StoreError::DuplicateEmail));
        assert_eq!(store.user_count().unwrap(), 2);
    }

    #[actix_web::test]
    async fn test_empty_store() {
        let store = InMemoryStore::new(Vec::new(), Vec::new(), Vec::new());

        assert!(!store.gender_exists(1).await.unwrap());
        assert!(!store.email_exists("pranaya.rout@example.com").await.unwrap());
    }

    #[test]
    fn test_poisoned_lock_reports_unavailable() {
        let store = InMemoryStore::seeded();

        std::thread::scope(|scope| {
            let writer = scope.spawn(|| {
                let _guard = store.users.write().unwrap();
                panic!("writer panicked while holding the lock");
            });
            assert!(writer.join().is_err());
        });

        assert!(matches!(store.user_count(), Err(StoreError::Unavailable(_))));
    }
}
