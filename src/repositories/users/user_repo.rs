//! # 사용자 리포지토리 구현
//!
//! 가입 완료 사용자를 MongoDB `users` 컬렉션에 저장하는 리포지토리입니다.
//!
//! ## 특징
//!
//! - **데이터 무결성**: `email_normalized` 유니크 인덱스가 이메일 중복의 최종 보장
//! - **중복 키 변환**: MongoDB 중복 키 에러(11000)는 `StoreError::DuplicateEmail`로 변환

use async_trait::async_trait;
use log::{debug, info};
use mongodb::bson::doc;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use crate::db::Database;
use crate::domain::entities::users::user::User;
use crate::repositories::seed;
use crate::repositories::{StoreError, UserStore};

pub const USERS_COLLECTION: &str = "users";

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY: i32 = 11000;

/// 사용자 데이터 액세스 리포지토리
///
/// ## 인덱스
///
/// - **컬렉션명**: `users`
/// - **인덱스**: email_normalized(unique), created_at(desc)
pub struct UserRepository {
    db: Database,
}

impl UserRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.collection::<User>(USERS_COLLECTION)
    }

    /// 유니크 인덱스 생성
    ///
    /// 이미 존재하는 인덱스는 MongoDB가 그대로 유지합니다.
    pub async fn create_indexes(&self) -> Result<(), mongodb::error::Error> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email_normalized": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_normalized_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, created_at_index])
            .await?;

        info!("✅ users 인덱스 생성 완료");

        Ok(())
    }

    /// 예제 사용자 시딩 (이미 있는 이메일은 건너뜀)
    pub async fn seed(&self) -> Result<(), mongodb::error::Error> {
        let collection = self.collection();

        for user in seed::users() {
            let exists = collection
                .find_one(doc! { "email_normalized": &user.email_normalized })
                .await?
                .is_some();

            if !exists {
                collection.insert_one(&user).await?;
                debug!("seed user inserted: {}", user.email_normalized);
            }
        }

        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create_user(&self, mut user: User) -> Result<User, StoreError> {
        let result = self
            .collection()
            .insert_one(&user)
            .await
            .map_err(store_error)?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::Unavailable("inserted id is not an ObjectId".to_string()))?;

        user.id = Some(id);

        Ok(user)
    }
}

fn store_error(e: mongodb::error::Error) -> StoreError {
    let code = match *e.kind {
        ErrorKind::Write(WriteFailure::WriteError(ref write_error)) => Some(write_error.code),
        _ => None,
    };

    store_error_for_code(code, e.to_string())
}

/// 쓰기 에러 코드를 저장소 에러로 변환 (중복 키만 `DuplicateEmail`)
fn store_error_for_code(code: Option<i32>, message: String) -> StoreError {
    match code {
        Some(DUPLICATE_KEY) => StoreError::DuplicateEmail,
        _ => StoreError::Unavailable(message),
    }
}
