//! # Application Error Handling System
//!
//! 회원가입 서비스의 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 결합하여 모든 에러를 일관된 HTTP 응답으로 변환합니다.
//!
//! ## 에러 분류
//!
//! - **검증 실패**: 클라이언트가 고칠 수 있는 입력 문제. 에러 목록 전체를 응답합니다.
//! - **인프라 장애**: 참조 데이터/DB 접근 실패. 상세 내용은 로그에만 남기고 일반 메시지를 응답합니다.
//! - **취소**: 타임아웃 또는 서버 종료로 평가가 중단됨.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 응답 본문 |
//! |----------|-------------|-----------|
//! | `Validation` | 400 Bad Request | `{"Errors": [{"Field": ..., "Error": ...}]}` |
//! | `ReferenceDataError` | 500 Internal Server Error | `{"error": "Internal server error"}` |
//! | `DatabaseError` | 500 Internal Server Error | `{"error": "Internal server error"}` |
//! | `InternalError` | 500 Internal Server Error | `{"error": "Internal server error"}` |
//! | `Cancelled` | 503 Service Unavailable | `{"error": "Service unavailable"}` |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn register(&self, request: RegisterUserRequest) -> AppResult<User> {
//!     let result = self.validator.evaluate(&request, self.reference.as_ref(), &cancel).await?;
//!
//!     if !result.is_valid() {
//!         return Err(AppError::Validation(result));
//!     }
//!     // ...
//! }
//! ```

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use log::error;
use thiserror::Error;

use crate::domain::dto::users::response::ValidationErrorResponse;
use crate::repositories::StoreError;
use crate::validation::engine::EvaluationError;
use crate::validation::result::{ValidationError, ValidationResult};
use crate::validation::rules::fields;
use crate::validation::rules::lookup::EMAIL_NOT_UNIQUE;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed with {} error(s)", .0.errors().len())]
    Validation(ValidationResult),

    #[error("Reference data error: {0}")]
    ReferenceDataError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match self {
            AppError::Validation(result) => {
                HttpResponse::build(status).json(ValidationErrorResponse::from(result.clone()))
            }
            AppError::Cancelled => HttpResponse::build(status).json(serde_json::json!({
                "error": "Service unavailable"
            })),
            _ => {
                error!("{}", self);
                HttpResponse::build(status).json(serde_json::json!({
                    "error": "Internal server error"
                }))
            }
        }
    }
}

impl From<EvaluationError> for AppError {
    fn from(e: EvaluationError) -> Self {
        match e {
            EvaluationError::PortAccess(e) => AppError::ReferenceDataError(e.to_string()),
            EvaluationError::Cancelled => AppError::Cancelled,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            // 유니크 인덱스 위반은 사전 중복 검사와 동일한 검증 실패로 보고
            StoreError::DuplicateEmail => AppError::Validation(ValidationResult::from_errors(vec![
                ValidationError::new(fields::EMAIL, EMAIL_NOT_UNIQUE),
            ])),
            StoreError::Unavailable(msg) => AppError::DatabaseError(msg),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::port::PortError;
    use actix_web::ResponseError;
    use actix_web::body::to_bytes;

    async fn body_json(error: AppError) -> serde_json::Value {
        let response = error.error_response();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::Validation(ValidationResult::from_errors(vec![ValidationError::new(
            "Email",
            "Email is required.",
        )]));
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_validation_body_lists_errors() {
        let error = AppError::Validation(ValidationResult::from_errors(vec![
            ValidationError::new("FirstName", "First Name is required."),
            ValidationError::object_level("Confirm Password must match Password."),
        ]));

        assert_eq!(
            body_json(error).await,
            serde_json::json!({
                "Errors": [
                    { "Field": "FirstName", "Error": "First Name is required." },
                    { "Field": "", "Error": "Confirm Password must match Password." }
                ]
            })
        );
    }

    #[actix_web::test]
    async fn test_infrastructure_errors_hide_details() {
        let error = AppError::ReferenceDataError("connection refused to 10.0.0.5".to_string());
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(error).await;
        assert_eq!(body, serde_json::json!({ "error": "Internal server error" }));
    }

    #[test]
    fn test_cancelled_error_response() {
        let response = AppError::Cancelled.error_response();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_from_evaluation_error() {
        let error = AppError::from(EvaluationError::PortAccess(PortError::Unavailable(
            "down".to_string(),
        )));
        assert!(matches!(error, AppError::ReferenceDataError(_)));

        assert!(matches!(
            AppError::from(EvaluationError::Cancelled),
            AppError::Cancelled
        ));
    }

    #[test]
    fn test_duplicate_email_becomes_validation_failure() {
        let AppError::Validation(result) = AppError::from(StoreError::DuplicateEmail) else {
            panic!("Expected Validation");
        };

        assert_eq!(
            result.errors(),
            &[ValidationError::new("Email", "Email must be unique.")]
        );
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
