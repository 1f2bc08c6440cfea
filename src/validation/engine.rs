//! # 규칙 엔진
//!
//! 회원가입 요청 하나를 단일 패스 파이프라인으로 평가합니다.
//!
//! ```text
//! 요청 ─▶ 동기 필드 규칙 ─▶ 교차 필드 규칙 ─▶ 비동기 조회 규칙 (동시 실행) ─▶ 집계 ─▶ ValidationResult
//! ```
//!
//! ## 실행 규칙
//!
//! - 한 필드의 체인은 첫 실패에서 멈추지만, 서로 다른 필드는 독립적으로 모두 평가됩니다.
//! - 교차 필드 규칙과 조회 규칙은 필드 규칙의 실패 여부와 관계없이 실행됩니다.
//!   단, 조회 규칙이 `depends_on`으로 지정한 필드가 실패했다면 그 조회는 건너뜁니다.
//! - 조회 규칙은 서로 독립적인 읽기이므로 동시에 실행되며, 결과는 완료 순서가 아니라
//!   [`REGISTRATION_RULES`]에 선언된 순서대로 다시 배치됩니다.
//! - 재시도는 없습니다. 포트 접근 실패와 취소는 에러로 전파되며 부분 결과는 반환하지 않습니다.
//!
//! ## 정규 순서
//!
//! `FirstName`, `LastName`, `Email` (형식 → 중복), `Password`, `PhoneNumber`, `Address`,
//! `DateOfBirth`, `GenderId`, 객체 수준 비밀번호 확인, `CountryId`/`CityId`

use chrono::{Local, NaiveDate};
use futures_util::future::try_join_all;
use log::{debug, info, warn};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::domain::dto::users::request::RegisterUserRequest;

use super::port::{PortError, ReferenceDataPort};
use super::result::{ValidationError, ValidationResult};
use super::rules::cross_field::PasswordsMatchRule;
use super::rules::lookup::{CountryCityRule, EmailUniqueRule, GenderExistsRule};
use super::rules::{AsyncRule, RuleContext, SyncRule, field};

/// 규칙 목록의 한 항목
#[derive(Clone, Copy)]
pub enum Rule {
    Sync(&'static dyn SyncRule),
    Async(&'static dyn AsyncRule),
}

/// 회원가입 요청에 적용되는 규칙 (선언 순서 = 에러 보고 순서)
pub static REGISTRATION_RULES: &[Rule] = &[
    Rule::Sync(&field::FIRST_NAME),
    Rule::Sync(&field::LAST_NAME),
    Rule::Sync(&field::EMAIL),
    Rule::Async(&EmailUniqueRule),
    Rule::Sync(&field::PASSWORD),
    Rule::Sync(&field::PHONE_NUMBER),
    Rule::Sync(&field::ADDRESS),
    Rule::Sync(&field::DATE_OF_BIRTH),
    Rule::Async(&GenderExistsRule),
    Rule::Sync(&PasswordsMatchRule),
    Rule::Async(&CountryCityRule),
];

/// 평가를 끝내지 못한 이유
///
/// 검증 실패는 여기에 포함되지 않습니다 (항상 `ValidationResult`로 표현됨).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// 참조 데이터 포트 접근 실패 (인프라 장애)
    #[error(transparent)]
    PortAccess(#[from] PortError),

    /// 외부 취소 신호로 평가가 중단됨
    #[error("validation was cancelled")]
    Cancelled,
}

/// 규칙 하나의 결과 자리
enum Slot {
    Ready(Option<ValidationError>),
    Pending(usize),
}

/// 회원가입 요청 검증기
///
/// 상태가 없으며 여러 요청이 공유해도 안전합니다. 참조 데이터 포트는 평가마다 인자로 받습니다.
///
/// ```rust,ignore
/// let validator = RegistrationValidator::default();
/// let result = validator.evaluate(&request, store.as_ref(), &cancel).await?;
///
/// if !result.is_valid() {
///     return Err(AppError::Validation(result));
/// }
/// ```
#[derive(Clone, Copy)]
pub struct RegistrationValidator {
    rules: &'static [Rule],
}

impl Default for RegistrationValidator {
    fn default() -> Self {
        Self::new(REGISTRATION_RULES)
    }
}

impl RegistrationValidator {
    pub fn new(rules: &'static [Rule]) -> Self {
        Self { rules }
    }

    /// 오늘 날짜(로컬 시간) 기준으로 평가
    pub async fn evaluate(
        &self,
        request: &RegisterUserRequest,
        port: &dyn ReferenceDataPort,
        cancel: &CancellationToken,
    ) -> Result<ValidationResult, EvaluationError> {
        self.evaluate_at(request, port, cancel, Local::now().date_naive())
            .await
    }

    /// 기준일을 지정하여 평가
    ///
    /// # Errors
    ///
    /// * `EvaluationError::PortAccess` - 조회 중 하나라도 포트 접근에 실패한 경우
    /// * `EvaluationError::Cancelled` - 시작 전 또는 조회 대기 중에 `cancel`이 취소된 경우
    pub async fn evaluate_at(
        &self,
        request: &RegisterUserRequest,
        port: &dyn ReferenceDataPort,
        cancel: &CancellationToken,
        today: NaiveDate,
    ) -> Result<ValidationResult, EvaluationError> {
        if cancel.is_cancelled() {
            info!("validation cancelled before start");
            return Err(EvaluationError::Cancelled);
        }

        debug!("evaluating registration with {} rules", self.rules.len());

        let ctx = RuleContext { today };

        // 1단계: 동기 규칙 (필드 체인, 교차 필드)
        let mut slots: Vec<Slot> = self
            .rules
            .iter()
            .map(|rule| match rule {
                Rule::Sync(rule) => Slot::Ready(rule.validate(request, &ctx)),
                Rule::Async(_) => Slot::Ready(None),
            })
            .collect();

        let failed_fields: Vec<&'static str> = self
            .rules
            .iter()
            .zip(&slots)
            .filter_map(|(rule, slot)| match (rule, slot) {
                (Rule::Sync(rule), Slot::Ready(Some(_))) => Some(rule.field()),
                _ => None,
            })
            .collect();

        // 2단계: 조회 규칙 (동시 실행)
        let mut lookups = Vec::new();
        for (index, rule) in self.rules.iter().enumerate() {
            let Rule::Async(rule) = rule else { continue };

            if let Some(dependency) = rule.depends_on() {
                if failed_fields.contains(&dependency) {
                    debug!("skipping {} lookup: {} already failed", rule.field(), dependency);
                    continue;
                }
            }

            if let Some(slot) = slots.get_mut(index) {
                *slot = Slot::Pending(lookups.len());
            }
            lookups.push(rule.validate(request, port));
        }

        let mut outcomes = if lookups.is_empty() {
            Vec::new()
        } else {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    info!("validation cancelled while awaiting reference data");
                    return Err(EvaluationError::Cancelled);
                }
                joined = try_join_all(lookups) => joined.map_err(|e| {
                    warn!("reference data lookup failed: {}", e);
                    EvaluationError::PortAccess(e)
                })?,
            }
        };

        // 3단계: 선언 순서대로 집계
        let errors: Vec<ValidationError> = slots
            .into_iter()
            .filter_map(|slot| match slot {
                Slot::Ready(outcome) => outcome,
                Slot::Pending(index) => outcomes.get_mut(index).and_then(Option::take),
            })
            .collect();

        debug!("registration evaluated with {} error(s)", errors.len());

        Ok(ValidationResult::from_errors(errors))
    }
}
