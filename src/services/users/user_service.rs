//! # 사용자 가입 서비스 구현
//!
//! 가입 요청을 검증하고, 통과한 요청만 사용자로 저장합니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! RegisterUserRequest
//!        │
//!        ▼
//! ┌─────────────────────┐   실패   ┌────────────────────────┐
//! │ RegistrationValidator│ ───────▶ │ AppError::Validation   │ (400)
//! └─────────────────────┘          └────────────────────────┘
//!        │ 통과
//!        ▼
//! ┌─────────────────────┐ 중복키   ┌────────────────────────┐
//! │ UserStore::create   │ ───────▶ │ AppError::Validation   │ (400, Email must be unique.)
//! └─────────────────────┘          └────────────────────────┘
//!        │
//!        ▼
//!      User
//! ```
//!
//! 포트 장애와 취소는 각각 `AppError::ReferenceDataError`, `AppError::Cancelled`로 전파됩니다.

use std::sync::Arc;

use log::{debug, info};
use tokio_util::sync::CancellationToken;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::RegisterUserRequest;
use crate::domain::entities::users::user::User;
use crate::repositories::UserStore;
use crate::validation::engine::RegistrationValidator;
use crate::validation::port::ReferenceDataPort;

/// 회원가입 서비스
#[derive(Clone)]
pub struct RegistrationService {
    reference: Arc<dyn ReferenceDataPort>,
    users: Arc<dyn UserStore>,
    validator: RegistrationValidator,
}

impl RegistrationService {
    pub fn new(reference: Arc<dyn ReferenceDataPort>, users: Arc<dyn UserStore>) -> Self {
        Self {
            reference,
            users,
            validator: RegistrationValidator::default(),
        }
    }

    /// 가입 요청 처리
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 저장된 사용자 (id 포함)
    /// * `Err(AppError::Validation)` - 검증 실패 또는 저장 시점의 이메일 중복
    /// * `Err(AppError::ReferenceDataError)` - 참조 데이터 조회 실패
    /// * `Err(AppError::DatabaseError)` - 사용자 저장 실패
    /// * `Err(AppError::Cancelled)` - 평가 중 취소
    pub async fn register(
        &self,
        request: RegisterUserRequest,
        cancel: &CancellationToken,
    ) -> AppResult<User> {
        let result = self
            .validator
            .evaluate(&request, self.reference.as_ref(), cancel)
            .await?;

        if !result.is_valid() {
            debug!("registration rejected with {} error(s)", result.errors().len());
            return Err(AppError::Validation(result));
        }

        let Some(date_of_birth) = request.date_of_birth else {
            return Err(AppError::InternalError(
                "validated request has no date of birth".to_string(),
            ));
        };

        let user = self
            .users
            .create_user(User::new_registered(request, date_of_birth))
            .await?;

        info!("user registered: {}", user.id_string().unwrap_or_default());

        Ok(user)
    }
}
