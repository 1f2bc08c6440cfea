//! HTTP 요청 핸들러 모듈
//!
//! 요청 본문을 DTO로 받아 서비스에 위임하고, 결과를 HTTP 응답으로 변환합니다.
//! 에러 응답 변환은 [`AppError`](crate::core::errors::AppError)의 `ResponseError` 구현이 담당합니다.

pub mod users;
