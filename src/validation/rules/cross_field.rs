//! 교차 필드 규칙: 비밀번호 확인

use super::{RuleContext, SyncRule};
use crate::domain::dto::users::request::RegisterUserRequest;
use crate::validation::result::{OBJECT_LEVEL, ValidationError};

pub const PASSWORD_MISMATCH: &str = "Confirm Password must match Password.";

/// `Password`와 `ConfirmPassword`가 정확히 일치해야 함 (대소문자 구분, 정규화 없음)
///
/// 실패는 특정 필드가 아닌 객체 수준 에러로 보고되며, 필드 규칙의 성공 여부와 관계없이 항상 평가됩니다.
pub struct PasswordsMatchRule;

impl SyncRule for PasswordsMatchRule {
    fn field(&self) -> &'static str {
        OBJECT_LEVEL
    }

    fn validate(&self, request: &RegisterUserRequest, _: &RuleContext) -> Option<ValidationError> {
        (request.password != request.confirm_password)
            .then(|| ValidationError::object_level(PASSWORD_MISMATCH))
    }
}
