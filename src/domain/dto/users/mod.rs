//! # User Data Transfer Objects Module
//!
//! 회원가입 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! ## 요청/응답 흐름
//!
//! ```text
//! JSON ──serde──▶ RegisterUserRequest ──검증──▶ User ──저장──▶ UserResponse
//!                                          │
//!                                          └─실패─▶ ValidationErrorResponse
//! ```
//!
//! ## 응답 예시
//!
//! ```json
//! {
//!   "Errors": [
//!     { "Field": "Email", "Error": "Email must be unique." },
//!     { "Field": "", "Error": "Confirm Password must match Password." }
//!   ]
//! }
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
