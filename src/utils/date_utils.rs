//! # 날짜 유틸리티
//!
//! 생년월일 입력 파싱과 만 나이 계산을 담당합니다.

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime};
use serde::Deserialize;

/// "입력되지 않은" 날짜로 취급하는 기본값 (0001-01-01)
pub fn is_default_date(date: &NaiveDate) -> bool {
    date.year() == 1 && date.month() == 1 && date.day() == 1
}

/// 날짜 문자열 파싱
///
/// 다음 형식을 순서대로 시도하며, 시각이 포함된 경우 날짜 부분만 사용합니다.
///
/// - `YYYY-MM-DD`
/// - `YYYY-MM-DDTHH:MM:SS[.fff]` (타임존 없음)
/// - RFC 3339 (`2000-01-01T00:00:00Z`, `2000-01-01T09:00:00+09:00`)
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// 생년월일 역직렬화
///
/// 빈 값, `null`, `0001-01-01`은 모두 `None`(미입력)이 됩니다.
/// 해석할 수 없는 문자열은 역직렬화 에러입니다.
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;

    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => {
            let date = parse_date(value).ok_or_else(|| {
                serde::de::Error::custom(format!("invalid date: {value}"))
            })?;
            Ok((!is_default_date(&date)).then_some(date))
        }
    }
}

/// `today` 기준으로 `years`년 전의 날짜
///
/// 윤일(2월 29일)은 해당 연도에 없으면 2월 28일로 맞춰집니다.
pub fn years_before(today: NaiveDate, years: u32) -> Option<NaiveDate> {
    today.checked_sub_months(Months::new(years * 12))
}

/// 생년월일이 `today` 기준으로 만 `years`세 이상인지
///
/// 연도 차이를 빼는 대신 기준일을 이동시켜 비교하므로 생일 전후와 윤년이 정확히 처리됩니다.
pub fn is_at_least_years_old(date_of_birth: NaiveDate, today: NaiveDate, years: u32) -> bool {
    years_before(today, years).is_some_and(|threshold| date_of_birth <= threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("2000-01-01"), Some(date(2000, 1, 1)));
        assert_eq!(parse_date("2000-01-01T00:00:00"), Some(date(2000, 1, 1)));
        assert_eq!(parse_date("1990-05-20T13:45:10.123"), Some(date(1990, 5, 20)));
        assert_eq!(parse_date("1985-08-15T00:00:00Z"), Some(date(1985, 8, 15)));
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("2000-13-01"), None);
    }

    #[test]
    fn test_deserialize_optional_date() {
        #[derive(Deserialize)]
        struct Body {
            #[serde(default, deserialize_with = "deserialize_optional_date")]
            dob: Option<NaiveDate>,
        }

        let body: Body = serde_json::from_str(r#"{"dob": "2000-01-01T00:00:00"}"#).unwrap();
        assert_eq!(body.dob, Some(date(2000, 1, 1)));

        let body: Body = serde_json::from_str(r#"{"dob": "0001-01-01T00:00:00"}"#).unwrap();
        assert_eq!(body.dob, None);

        let body: Body = serde_json::from_str(r#"{"dob": null}"#).unwrap();
        assert_eq!(body.dob, None);

        let body: Body = serde_json::from_str("{}").unwrap();
        assert_eq!(body.dob, None);

        assert!(serde_json::from_str::<Body>(r#"{"dob": "yesterday"}"#).is_err());
    }

    #[test]
    fn test_age_on_birthday() {
        let today = date(2024, 6, 15);

        assert!(is_at_least_years_old(date(2006, 6, 15), today, 18));
        assert!(!is_at_least_years_old(date(2006, 6, 16), today, 18));
        assert!(is_at_least_years_old(date(2006, 6, 14), today, 18));
    }

    #[test]
    fn test_age_with_leap_day() {
        // 2월 29일생은 평년에는 3월 1일이 되어야 만 나이가 찬다
        let born = date(2004, 2, 29);

        assert!(!is_at_least_years_old(born, date(2022, 2, 28), 18));
        assert!(is_at_least_years_old(born, date(2022, 3, 1), 18));

        // 기준일이 윤일이면 18년 전의 2월 28일로 맞춰진다
        assert_eq!(years_before(date(2024, 2, 29), 18), Some(date(2006, 2, 28)));
    }
}
