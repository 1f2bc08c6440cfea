//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository)를 통해 MongoDB `users` 컬렉션에 가입 완료 사용자를 저장합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::user_repo::UserRepository;
//!
//! let user_repo = UserRepository::new(database);
//! user_repo.create_indexes().await?;
//! let saved = user_repo.create_user(user).await?;
//! ```

pub mod user_repo;
