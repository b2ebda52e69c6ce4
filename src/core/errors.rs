//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 라우트가
//! 동일한 JSON 에러 응답을 내보내도록 합니다.
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "success": false,
//!   "error": "Not found: Meal not found.",
//!   "message": "Meal not found."
//! }
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! async fn find_meal(id: &str) -> Result<Meal, AppError> {
//!     repo.find_by_id(id).await?
//!         .ok_or_else(|| AppError::NotFound("Meal not found.".to_string()))
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 핸들러에서 `Result<HttpResponse, AppError>`로 반환하면
/// 자동으로 HTTP 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 결제 대행사 등 외부 서비스 에러 (502 Bad Gateway)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 접두어 없이 원래 메시지만 반환합니다.
    pub fn detail(&self) -> &str {
        match self {
            AppError::DatabaseError(msg)
            | AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ExternalServiceError(msg)
            | AppError::InternalError(msg) => msg,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 500 에러는 내부 정보를 노출하지 않도록 일반 메시지로 대체하고
    /// 상세 내용은 로그로만 남깁니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        let (error, message) = if status == actix_web::http::StatusCode::INTERNAL_SERVER_ERROR {
            log::error!("{}", self);
            (
                "Internal Server Error".to_string(),
                "Internal server error. Please try again later.",
            )
        } else {
            (self.to_string(), self.detail())
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "success": false,
                "error": error,
                "message": message,
            }))
    }
}

/// MongoDB 드라이버 에러는 모두 500 `DatabaseError`로 취급합니다.
impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::MessageBody;

    fn body_json(error: AppError) -> serde_json::Value {
        let bytes = error.error_response().into_body().try_into_bytes().ok().expect("json body");
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("limit must be between 1 and 100".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("Meal not found.".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_external_service_error_response() {
        let error = AppError::ExternalServiceError("card_declined".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_database_error_response() {
        let error = AppError::DatabaseError("connection reset".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_client_error_body_carries_detail() {
        let body = body_json(AppError::NotFound("User not found.".to_string()));

        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "User not found.");
        assert_eq!(body["error"], "Not found: User not found.");
    }

    #[test]
    fn test_server_error_body_hides_detail() {
        let body = body_json(AppError::DatabaseError("auth failed for user admin".to_string()));

        assert_eq!(body["error"], "Internal Server Error");
        assert_eq!(body["message"], "Internal server error. Please try again later.");
    }

    #[test]
    fn test_mongodb_error_becomes_database_error() {
        let driver_error = mongodb::error::Error::from(std::io::Error::other("connection reset"));
        let error = AppError::from(driver_error);

        assert!(matches!(error, AppError::DatabaseError(_)));
        assert_eq!(error.status_code(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
