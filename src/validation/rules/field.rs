//! # 필드 규칙
//!
//! 단일 필드에 대한 순수 동기 술어들입니다. 각 필드의 술어는 하나의 체인([`FieldChain`])으로
//! 묶이며, 체인 안에서는 **첫 번째 실패에서 평가를 멈춥니다**. 예를 들어 이름이 비어 있으면
//! "required" 에러만 보고하고 "letters only" 에러는 보고하지 않습니다.
//!
//! | 필드 | 규칙 |
//! |------|------|
//! | `FirstName`, `LastName` | 필수, 문자(letter)만 허용 |
//! | `Email` | 필수, 이메일 형식 |
//! | `Password` | 필수 |
//! | `PhoneNumber` | 필수 |
//! | `Address` | 선택, 입력 시 200자 이하 |
//! | `DateOfBirth` | 필수, 미래 불가, 만 18세 이상 |

use chrono::NaiveDate;
use validator::ValidateEmail;

use super::fields;
use super::{RuleContext, SyncRule};
use crate::domain::dto::users::request::RegisterUserRequest;
use crate::utils::date_utils::is_at_least_years_old;
use crate::validation::result::ValidationError;

/// 주소 최대 길이 (문자 수)
pub const ADDRESS_MAX_LENGTH: usize = 200;

/// 가입 가능한 최소 나이
pub const MINIMUM_AGE: u32 = 18;

/// 체인의 한 단계: 술어와 실패 메시지
pub struct Check<T: ?Sized + 'static> {
    pub passes: fn(&T, &RuleContext) -> bool,
    pub message: &'static str,
}

/// 한 필드의 규칙 체인
pub struct FieldChain<T: ?Sized + 'static> {
    pub field: &'static str,
    pub value: fn(&RegisterUserRequest) -> &T,
    pub checks: &'static [Check<T>],
}

impl<T: ?Sized + 'static> SyncRule for FieldChain<T> {
    fn field(&self) -> &'static str {
        self.field
    }

    fn validate(&self, request: &RegisterUserRequest, ctx: &RuleContext) -> Option<ValidationError> {
        let value = (self.value)(request);

        self.checks
            .iter()
            .find(|check| !(check.passes)(value, ctx))
            .map(|check| ValidationError::new(self.field, check.message))
    }
}

pub static FIRST_NAME: FieldChain<str> = FieldChain {
    field: fields::FIRST_NAME,
    value: first_name,
    checks: &[
        Check { passes: not_empty, message: "First Name is required." },
        Check { passes: only_letters, message: "First Name must contain only letters." },
    ],
};

pub static LAST_NAME: FieldChain<str> = FieldChain {
    field: fields::LAST_NAME,
    value: last_name,
    checks: &[
        Check { passes: not_empty, message: "Last Name is required." },
        Check { passes: only_letters, message: "Last Name must contain only letters." },
    ],
};

pub static EMAIL: FieldChain<str> = FieldChain {
    field: fields::EMAIL,
    value: email,
    checks: &[
        Check { passes: not_empty, message: "Email is required." },
        Check { passes: email_format, message: "Email must be in a valid format." },
    ],
};

pub static PASSWORD: FieldChain<str> = FieldChain {
    field: fields::PASSWORD,
    value: password,
    checks: &[Check { passes: not_empty, message: "Password is required." }],
};

pub static PHONE_NUMBER: FieldChain<str> = FieldChain {
    field: fields::PHONE_NUMBER,
    value: phone_number,
    checks: &[Check { passes: not_empty, message: "Phone Number is required." }],
};

pub static ADDRESS: FieldChain<Option<String>> = FieldChain {
    field: fields::ADDRESS,
    value: address,
    checks: &[Check {
        passes: address_within_limit,
        message: "Address cannot exceed 200 characters.",
    }],
};

pub static DATE_OF_BIRTH: FieldChain<Option<NaiveDate>> = FieldChain {
    field: fields::DATE_OF_BIRTH,
    value: date_of_birth,
    checks: &[
        Check { passes: date_present, message: "Date of Birth is required." },
        Check { passes: not_in_future, message: "Date of Birth cannot be a future date." },
        Check { passes: old_enough, message: "User must be at least 18 years old." },
    ],
};

fn first_name(request: &RegisterUserRequest) -> &str {
    &request.first_name
}

fn last_name(request: &RegisterUserRequest) -> &str {
    &request.last_name
}

fn email(request: &RegisterUserRequest) -> &str {
    &request.email
}

fn password(request: &RegisterUserRequest) -> &str {
    &request.password
}

fn phone_number(request: &RegisterUserRequest) -> &str {
    &request.phone_number
}

fn address(request: &RegisterUserRequest) -> &Option<String> {
    &request.address
}

fn date_of_birth(request: &RegisterUserRequest) -> &Option<NaiveDate> {
    &request.date_of_birth
}

fn not_empty(value: &str, _: &RuleContext) -> bool {
    !value.trim().is_empty()
}

fn only_letters(value: &str, _: &RuleContext) -> bool {
    value.chars().all(char::is_alphabetic)
}

fn email_format(value: &str, _: &RuleContext) -> bool {
    value.validate_email()
}

fn address_within_limit(value: &Option<String>, _: &RuleContext) -> bool {
    value
        .as_deref()
        .is_none_or(|address| address.chars().count() <= ADDRESS_MAX_LENGTH)
}

fn date_present(value: &Option<NaiveDate>, _: &RuleContext) -> bool {
    value.is_some()
}

fn not_in_future(value: &Option<NaiveDate>, ctx: &RuleContext) -> bool {
    value.is_none_or(|dob| dob <= ctx.today)
}

fn old_enough(value: &Option<NaiveDate>, ctx: &RuleContext) -> bool {
    value.is_none_or(|dob| is_at_least_years_old(dob, ctx.today, MINIMUM_AGE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RuleContext {
        RuleContext {
            today: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        }
    }

    fn request() -> RegisterUserRequest {
        RegisterUserRequest {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john@new.com".to_string(),
            password: "Secure1".to_string(),
            confirm_password: "Secure1".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2000, 1, 1),
            phone_number: "1234567890".to_string(),
            gender_id: 1,
            address: None,
            country_id: 1,
            city_id: 1,
        }
    }

    fn message(chain: &dyn SyncRule, request: &RegisterUserRequest) -> Option<String> {
        chain.validate(request, &ctx()).map(|e| e.message)
    }

    #[test]
    fn test_valid_request_passes_every_chain() {
        let request = request();
        let chains: [&dyn SyncRule; 7] = [
            &FIRST_NAME, &LAST_NAME, &EMAIL, &PASSWORD, &PHONE_NUMBER, &ADDRESS, &DATE_OF_BIRTH,
        ];

        for chain in chains {
            assert_eq!(chain.validate(&request, &ctx()), None, "{}", chain.field());
        }
    }

    #[test]
    fn test_empty_name_stops_at_required() {
        let mut request = request();
        request.first_name = String::new();

        let error = FIRST_NAME.validate(&request, &ctx()).unwrap();
        assert_eq!(error.field, "FirstName");
        assert_eq!(error.message, "First Name is required.");
    }

    #[test]
    fn test_name_with_digits_or_spaces() {
        let mut request = request();
        request.last_name = "Doe2".to_string();
        assert_eq!(
            message(&LAST_NAME, &request).as_deref(),
            Some("Last Name must contain only letters.")
        );

        request.last_name = "Van Damme".to_string();
        assert_eq!(
            message(&LAST_NAME, &request).as_deref(),
            Some("Last Name must contain only letters.")
        );

        // 유니코드 문자도 letter로 인정
        request.last_name = "Müller".to_string();
        assert_eq!(message(&LAST_NAME, &request), None);
    }

    #[test]
    fn test_email_chain() {
        let mut request = request();

        request.email = String::new();
        assert_eq!(message(&EMAIL, &request).as_deref(), Some("Email is required."));

        request.email = "not-an-email".to_string();
        assert_eq!(
            message(&EMAIL, &request).as_deref(),
            Some("Email must be in a valid format.")
        );
    }

    #[test]
    fn test_required_single_rule_fields() {
        let mut request = request();
        request.password = String::new();
        request.phone_number = "   ".to_string();

        assert_eq!(message(&PASSWORD, &request).as_deref(), Some("Password is required."));
        assert_eq!(
            message(&PHONE_NUMBER, &request).as_deref(),
            Some("Phone Number is required.")
        );
    }

    #[test]
    fn test_address_limit() {
        let mut request = request();

        request.address = Some("a".repeat(ADDRESS_MAX_LENGTH));
        assert_eq!(message(&ADDRESS, &request), None);

        request.address = Some("a".repeat(ADDRESS_MAX_LENGTH + 1));
        assert_eq!(
            message(&ADDRESS, &request).as_deref(),
            Some("Address cannot exceed 200 characters.")
        );
    }

    #[test]
    fn test_date_of_birth_chain_order() {
        let mut request = request();

        request.date_of_birth = None;
        assert_eq!(
            message(&DATE_OF_BIRTH, &request).as_deref(),
            Some("Date of Birth is required.")
        );

        // 미래 날짜는 "미성년" 메시지 대신 "미래 불가"에서 멈춘다
        request.date_of_birth = NaiveDate::from_ymd_opt(2024, 6, 16);
        assert_eq!(
            message(&DATE_OF_BIRTH, &request).as_deref(),
            Some("Date of Birth cannot be a future date.")
        );

        request.date_of_birth = NaiveDate::from_ymd_opt(2014, 6, 15);
        assert_eq!(
            message(&DATE_OF_BIRTH, &request).as_deref(),
            Some("User must be at least 18 years old.")
        );
    }

    #[test]
    fn test_eighteenth_birthday_is_eligible() {
        let mut request = request();

        request.date_of_birth = NaiveDate::from_ymd_opt(2006, 6, 15);
        assert_eq!(message(&DATE_OF_BIRTH, &request), None);

        request.date_of_birth = NaiveDate::from_ymd_opt(2006, 6, 16);
        assert_eq!(
            message(&DATE_OF_BIRTH, &request).as_deref(),
            Some("User must be at least 18 years old.")
        );
    }
}
