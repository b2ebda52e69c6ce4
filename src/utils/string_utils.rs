//! # 문자열 유틸리티
//!
//! 경로 파라미터와 요청 본문 문자열 처리에 쓰이는 공통 함수들입니다.

use serde::Deserialize;
use crate::core::errors::AppError;

/// 필수 문자열 검증: 앞뒤 공백을 제거하고 비어 있으면 에러
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{} is required", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 빈 문자열/공백 문자열을 `None`으로 정리하는 serde 역직렬화 함수
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 저장된 문서의 문자열 필드를 관대하게 읽습니다.
///
/// 다른 클라이언트가 숫자나 객체를 기록했더라도 조회 전체가 실패하지 않도록
/// 문자열이 아닌 값은 `None`으로 봅니다. 값은 다듬지 않습니다.
pub fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Lenient>::deserialize(deserializer)? {
        Some(Lenient::Text(text)) => Some(text),
        Some(Lenient::Other(_)) | None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        // 성공 케이스
        assert_eq!(validate_required_string("user@example.com", "email").unwrap(), "user@example.com");
        assert_eq!(validate_required_string("  user@example.com  ", "email").unwrap(), "user@example.com");

        // 실패 케이스
        assert!(validate_required_string("", "email").is_err());
        assert!(validate_required_string("   ", "email").is_err());
        assert!(validate_required_string("\t\n", "email").is_err());
    }

    #[test]
    fn test_validate_required_string_message() {
        match validate_required_string(" ", "email") {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, "email is required"),
            _ => panic!("Expected ValidationError"),
        }
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Gold".to_string())), Some("Gold".to_string()));
        assert_eq!(clean_optional_string(Some("  Gold  ".to_string())), Some("Gold".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            package_type: Option<String>,
        }

        let result: TestStruct = serde_json::from_str(r#"{"package_type": "  Silver  "}"#).unwrap();
        assert_eq!(result.package_type, Some("Silver".to_string()));

        let result: TestStruct = serde_json::from_str(r#"{"package_type": "   "}"#).unwrap();
        assert_eq!(result.package_type, None);

        let result: TestStruct = serde_json::from_str(r#"{"package_type": null}"#).unwrap();
        assert_eq!(result.package_type, None);

        let result: TestStruct = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.package_type, None);
    }

    #[test]
    fn test_deserialize_lenient_string() {
        #[derive(Deserialize)]
        struct Stored {
            #[serde(default, deserialize_with = "deserialize_lenient_string")]
            title: Option<String>,
        }

        let parse = |raw: &str| serde_json::from_str::<Stored>(raw).unwrap().title;

        assert_eq!(parse(r#"{"title": " Bibimbap "}"#), Some(" Bibimbap ".to_string()));
        assert_eq!(parse(r#"{"title": 123}"#), None);
        assert_eq!(parse(r#"{"title": {"ko": "비빔밥"}}"#), None);
        assert_eq!(parse(r#"{"title": ["a"]}"#), None);
        assert_eq!(parse(r#"{"title": null}"#), None);
        assert_eq!(parse(r#"{}"#), None);
    }
}
