//! 공통 유틸리티 함수 모듈
//!
//! 요청 역직렬화에서 사용되는 문자열/날짜 처리 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 빈 선택 문자열 처리, null 허용 문자열 역직렬화
//! - [`date_utils`] - 생년월일 파싱, 나이 계산
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::date_utils::is_at_least_years_old;
//! use crate::utils::string_utils::non_empty_string;
//!
//! let address = non_empty_string(Some(String::new())); // None
//! let adult = is_at_least_years_old(dob, today, 18);
//! ```

pub mod date_utils;
pub mod string_utils;
