//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 검증 코어가 사용하는 [`ReferenceDataPort`](crate::validation::port::ReferenceDataPort)와
//! 가입 완료 사용자를 저장하는 [`UserStore`]의 구현체들을 제공합니다.
//!
//! # 구현체
//!
//! | 구현체 | ReferenceDataPort | UserStore | 용도 |
//! |--------|:-:|:-:|------|
//! | [`ReferenceRepository`](reference::reference_repo::ReferenceRepository) | ✅ | | MongoDB + 선택적 Redis 캐시 |
//! | [`UserRepository`](users::user_repo::UserRepository) | | ✅ | MongoDB `users` 컬렉션 |
//! | [`InMemoryStore`](memory::InMemoryStore) | ✅ | ✅ | `STORAGE_BACKEND=memory`, 테스트 |
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::memory::InMemoryStore;
//!
//! let store = InMemoryStore::seeded();
//! assert!(store.email_exists("pranaya.rout@example.com").await?);
//! ```

pub mod memory;
pub mod reference;
pub mod seed;
pub mod users;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::users::user::User;

/// 사용자 저장 실패
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// 정규화된 이메일이 이미 존재함 (유니크 제약 위반)
    #[error("email is already registered")]
    DuplicateEmail,

    /// 저장소에 연결할 수 없거나 쓰기가 실패함
    #[error("user store unavailable: {0}")]
    Unavailable(String),
}

/// 가입 완료 사용자 저장소
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 사용자를 저장하고 id가 채워진 사용자를 돌려줌
    ///
    /// 같은 정규화 이메일이 이미 있으면 `StoreError::DuplicateEmail`을 돌려줍니다.
    /// 사전 중복 검사를 통과했더라도 동시 요청 경쟁은 여기서 최종 판정됩니다.
    async fn create_user(&self, user: User) -> Result<User, StoreError>;
}
