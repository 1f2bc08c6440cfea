//! # 사용자 관련 응답 DTO 모듈
//!
//! 가입 처리 결과를 클라이언트에게 전달하는 응답 객체들입니다.
//!
//! - [`UserResponse`]: 생성된 사용자. `ConfirmPassword`는 포함하지 않으며,
//!   `Password`는 환경 설정(`ECHO_PASSWORD`)에 따라 포함 여부가 결정됩니다.
//! - [`ValidationErrorResponse`]: 검증 실패 목록. 순서는 검증 엔진의 보고 순서를 그대로 따릅니다.

pub mod user_response;

pub use user_response::{UserResponse, ValidationErrorResponse};
