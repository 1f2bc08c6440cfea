//! 회원가입 서비스 백엔드
//!
//! 회원가입 요청을 필드 규칙, 교차 필드 규칙, 참조 데이터 조회 규칙으로 검증하고
//! 통과한 요청만 사용자로 저장하는 서비스입니다.
//!
//! # Features
//!
//! - **단일 패스 검증**: 모든 규칙을 한 번에 평가하고 실패를 정해진 순서로 모두 보고
//! - **동시 조회**: 이메일 중복, 성별, 국가/도시 조회를 동시에 실행
//! - **취소 지원**: 요청 타임아웃과 서버 종료 시 진행 중인 검증을 중단
//! - **MongoDB**: 참조 데이터와 사용자 저장 (이메일 유니크 인덱스)
//! - **Redis**: 참조 데이터 조회 캐싱 (선택)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 타임아웃
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌─────────────────┐
//! │    Services     │ ──▶ │   Validation    │ ← 규칙 엔진
//! └─────────────────┘     └─────────────────┘
//!          │                       │
//!          ▼                       ▼
//! ┌─────────────────────────────────────────┐
//! │  Repositories (UserStore, ReferenceData) │ ← 데이터 액세스
//! └─────────────────────────────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소 (또는 메모리 저장소)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_registration_service::repositories::memory::InMemoryStore;
//! use user_registration_service::validation::RegistrationValidator;
//!
//! let store = InMemoryStore::seeded();
//! let result = RegistrationValidator::default()
//!     .evaluate(&request, &store, &CancellationToken::new())
//!     .await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod validation;
