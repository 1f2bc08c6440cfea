//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! JSON 키는 기존 클라이언트와의 호환을 위해 PascalCase (`FirstName`, `CityId` 등)를 사용합니다.
//!
//! | 구분 | 타입 | 용도 |
//! |------|------|------|
//! | 요청 | `RegisterUserRequest` | `POST /api/users/register` 본문 |
//! | 응답 | `UserResponse` | 가입 성공 (200) |
//! | 응답 | `ValidationErrorResponse` | 검증 실패 (400) |
//!
//! ```text
//! dto/
//! └── users/
//!     ├── request/
//!     └── response/
//! ```

pub mod users;

pub use users::*;
