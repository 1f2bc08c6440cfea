//! # 문자열 유틸리티
//!
//! 요청 역직렬화에 사용하는 문자열 정리 함수들입니다.

use serde::Deserialize;

/// 빈 문자열을 "입력되지 않음"으로 취급
///
/// 값은 그대로 유지합니다 (공백 제거 없음). 길이 제한 같은 검사는 입력된 원문 그대로에 적용되어야 합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::non_empty_string;
///
/// assert_eq!(non_empty_string(Some("  Hello  ".to_string())), Some("  Hello  ".to_string()));
/// assert_eq!(non_empty_string(Some(String::new())), None);
/// assert_eq!(non_empty_string(None), None);
/// ```
pub fn non_empty_string(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// 선택적 문자열 필드를 위한 serde 역직렬화 함수
///
/// 누락, `null`, `""`만 `None`으로 바꾸고 나머지 값은 원문 그대로 둡니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Body {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     address: Option<String>,
/// }
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(non_empty_string(opt))
}

/// `null`을 빈 문자열로 받아들이는 필수 문자열 역직렬화 함수
///
/// 값은 그대로 유지합니다 (공백 제거 없음). 필수 여부 판단은 검증 규칙의 몫입니다.
pub fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
