//! # 회원가입 검증
//!
//! 회원가입 요청을 필드 규칙, 교차 필드 규칙, 참조 데이터 조회 규칙으로 평가하여
//! 하나의 [`ValidationResult`]를 만듭니다.
//!
//! ## 모듈 구성
//!
//! - [`result`]: 검증 결과 타입 (`Field`/`Error` 쌍의 순서 있는 목록)
//! - [`port`]: 참조 데이터 조회 포트 (성별, 국가/도시, 이메일 중복)
//! - [`rules`]: 정적으로 선언된 규칙 객체들
//! - [`engine`]: 규칙 목록을 실행하고 결과를 집계하는 엔진
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use tokio_util::sync::CancellationToken;
//! use user_registration_service::validation::RegistrationValidator;
//!
//! let result = RegistrationValidator::default()
//!     .evaluate(&request, store.as_ref(), &CancellationToken::new())
//!     .await?;
//!
//! for error in result.errors() {
//!     println!("{}: {}", error.field, error.message);
//! }
//! ```

pub mod engine;
pub mod port;
pub mod result;
pub mod rules;

pub use engine::{EvaluationError, REGISTRATION_RULES, RegistrationValidator, Rule};
pub use port::{City, Country, CountryWithCities, Gender, PortError, ReferenceDataPort};
pub use result::{OBJECT_LEVEL, ValidationError, ValidationResult};
