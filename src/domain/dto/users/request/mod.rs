//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`serde`, 이 모듈)
//! 2. **필드/교차 필드 검증**: 형식, 필수 여부, 나이, 비밀번호 확인 ([`validation`](crate::validation))
//! 3. **저장소 검증**: 이메일 중복, 성별/국가/도시 존재 여부 ([`validation`](crate::validation))
//!
//! 2, 3단계의 실패는 `ValidationResult`로 모여 HTTP 400 응답이 됩니다.

pub mod register_user;

pub use register_user::RegisterUserRequest;
