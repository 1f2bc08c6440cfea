//! # Domain Layer Module
//!
//! 회원가입 도메인의 데이터 구조를 담당하는 모듈입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - MongoDB 문서와 매핑되는 영속 객체 (User, 참조 데이터)
//! └── DTOs          - HTTP 요청/응답 계약 (PascalCase JSON)
//!      │
//!      ▼
//! Validation / Services
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 영속 엔티티
//!
//! - `User`: 가입이 완료된 사용자 (`users` 컬렉션)
//! - `GenderDocument`, `CountryDocument`, `CityDocument`: 참조 데이터 문서
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! - `RegisterUserRequest`: 가입 요청 본문. 값이 빠져 있어도 역직렬화는 성공하고,
//!   빈 값은 검증 단계에서 "required" 에러로 보고됩니다.
//! - `UserResponse`: 가입 성공 응답
//! - `ValidationErrorResponse`: 검증 실패 응답 (`{"Errors": [...]}`)
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::{RegisterUserRequest, User, UserResponse};
//!
//! let user = User::new_registered(request, date_of_birth);
//! let saved = store.create_user(user).await?;
//! let response = UserResponse::from_user(saved, echo_password);
//! ```

pub mod entities;
pub mod dto;

pub use entities::*;
pub use dto::*;
