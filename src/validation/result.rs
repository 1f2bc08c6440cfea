//! 검증 결과 타입
//!
//! 하나의 평가가 만들어내는 필드 단위 에러와, 그 에러들을 순서대로 모은 결과를 정의합니다.
//! 직렬화 형식은 실패 응답 본문(`{"Field": .., "Error": ..}`)과 동일합니다.

use serde::{Deserialize, Serialize};

/// 객체 수준 에러에 사용하는 필드 라벨 (특정 필드에 귀속되지 않음)
pub const OBJECT_LEVEL: &str = "";

/// 필드에 귀속된 단일 검증 실패
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// 필드 라벨 (객체 수준 에러는 빈 문자열)
    #[serde(rename = "Field")]
    pub field: String,

    /// 사용자에게 보여줄 메시지
    #[serde(rename = "Error")]
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// 특정 필드가 아닌 요청 전체에 대한 에러
    pub fn object_level(message: impl Into<String>) -> Self {
        Self::new(OBJECT_LEVEL, message)
    }

    pub fn is_object_level(&self) -> bool {
        self.field.is_empty()
    }
}

/// 한 번의 평가 결과
///
/// `valid`는 항상 `errors.is_empty()`와 같습니다. 생성자를 통해서만 만들어지므로
/// 두 값이 어긋날 수 없습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn valid() -> Self {
        Self::from_errors(Vec::new())
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// 실행 순서(정규 순서)대로 정렬된 에러 목록
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// 주어진 필드에 대한 에러 목록
    pub fn errors_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> + 'a {
        self.errors.iter().filter(move |e| e.field == field)
    }

    pub fn has_error(&self, field: &str, message: &str) -> bool {
        self.errors
            .iter()
            .any(|e| e.field == field && e.message == message)
    }
}
