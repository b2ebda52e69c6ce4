//! 식단 요청 처리 상태

use serde::{Deserialize, Deserializer, Serialize};
use crate::utils::string_utils::deserialize_lenient_string;

/// 저장 형식은 문자열입니다. 알 수 없는 값은 [`RequestStatus::Other`]로 그대로 보존합니다.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequestStatus {
    #[default]
    Pending,
    Delivered,
    Other(String),
}

impl RequestStatus {
    pub fn as_str(&self) -> &str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Delivered => "Delivered",
            RequestStatus::Other(status) => status,
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, RequestStatus::Delivered)
    }
}

impl From<String> for RequestStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "Pending" => RequestStatus::Pending,
            "Delivered" => RequestStatus::Delivered,
            _ => RequestStatus::Other(status),
        }
    }
}

impl From<RequestStatus> for String {
    fn from(status: RequestStatus) -> Self {
        match status {
            RequestStatus::Other(status) => status,
            known => known.as_str().to_string(),
        }
    }
}

/// 문서의 `requestStatus`를 읽습니다. 없거나 문자열이 아니면 `Pending`입니다.
pub fn deserialize_request_status<'de, D>(deserializer: D) -> Result<RequestStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_lenient_string(deserializer)?
        .map(RequestStatus::from)
        .unwrap_or_default())
}
