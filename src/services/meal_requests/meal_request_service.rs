//! 식단 요청(주문) 서비스
//!
//! 요청은 `Pending`으로 생성되고, 관리자가 제공하면 `Delivered`가 됩니다.
//! 이미 제공된 요청을 다시 제공하려 하면 200 응답에 `success: false`로 알립니다.

use std::any::Any;
use std::sync::Arc;
use once_cell::sync::OnceCell;
use crate::core::errors::AppError;
use crate::core::registry::{ServiceLocator, ServiceRegistration};
use crate::domain::dto::{ApiResponse, MealRequestDraft, MealRequestResponse};
use crate::domain::entities::MealRequest;
use crate::domain::models::RequestStatus;
use crate::repositories::MealRequestRepository;
use crate::utils::bson_utils::parse_object_id;
use crate::utils::string_utils::validate_required_string;

/// 제공 요청에 대한 판정
#[derive(Debug, PartialEq)]
enum ServeOutcome {
    AlreadyServed,
    MarkDelivered,
}

fn serve_outcome(request: Option<&MealRequest>) -> Result<ServeOutcome, AppError> {
    let request = request
        .ok_or_else(|| AppError::NotFound("Meal request not found.".to_string()))?;

    if request.request_status.is_delivered() {
        Ok(ServeOutcome::AlreadyServed)
    } else {
        Ok(ServeOutcome::MarkDelivered)
    }
}

static MEAL_REQUEST_SERVICE_INSTANCE: OnceCell<Arc<MealRequestService>> = OnceCell::new();

pub struct MealRequestService {
    request_repo: Arc<MealRequestRepository>,
}

impl MealRequestService {
    pub fn instance() -> Arc<Self> {
        MEAL_REQUEST_SERVICE_INSTANCE
            .get_or_init(|| Arc::new(Self::new()))
            .clone()
    }

    fn new() -> Self {
        Self {
            request_repo: ServiceLocator::get::<MealRequestRepository>(),
        }
    }

    pub async fn list_requests(&self) -> Result<Vec<MealRequestResponse>, AppError> {
        let requests = self.request_repo.find_all().await?;
        Ok(requests.into_iter().map(MealRequestResponse::from).collect())
    }

    pub async fn requests_by(&self, email: &str) -> Result<Vec<MealRequestResponse>, AppError> {
        let email = validate_required_string(email, "email")?;
        let requests = self.request_repo.find_by_requester(&email).await?;
        Ok(requests.into_iter().map(MealRequestResponse::from).collect())
    }

    pub async fn create_request(&self, draft: MealRequestDraft) -> Result<ApiResponse, AppError> {
        let request = draft.into_meal_request()?;
        let id = self.request_repo.insert(&request).await?;

        log::info!("📝 식단 요청 접수: {} ({:?})", id, request.requester_email());
        Ok(ApiResponse::ok("Meal request sent successfully!").with_inserted_id(id.to_hex()))
    }

    pub async fn serve_request(&self, id: &str) -> Result<ApiResponse, AppError> {
        let object_id = parse_object_id(id)?;

        let request = self.request_repo.find_by_id(&object_id).await?;

        if serve_outcome(request.as_ref())? == ServeOutcome::AlreadyServed {
            return Ok(ApiResponse::rejected("Meal is already served."));
        }

        if !self.request_repo.set_status(&object_id, RequestStatus::Delivered).await? {
            // 조회 직후 취소된 경우
            return Err(AppError::NotFound("Meal request not found.".to_string()));
        }

        log::info!("🍽️ 식단 제공 완료: {}", id);
        Ok(ApiResponse::ok("Meal served successfully."))
    }

    pub async fn cancel_request(&self, id: &str) -> Result<ApiResponse, AppError> {
        let object_id = parse_object_id(id)?;

        if self.request_repo.delete(&object_id).await? {
            Ok(ApiResponse::ok("Meal request canceled successfully."))
        } else {
            Err(AppError::NotFound("Meal request not found.".to_string()))
        }
    }
}

fn meal_request_service_constructor() -> Box<dyn Any + Send + Sync> {
    Box::new(MealRequestService::instance())
}

inventory::submit! {
    ServiceRegistration {
        name: "meal_request_service",
        constructor: meal_request_service_constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Document;

    fn request_with(status: RequestStatus) -> MealRequest {
        let mut request = MealRequest::new(Vec::new(), Document::new(), Document::new());
        request.request_status = status;
        request
    }

    #[test]
    fn test_serve_missing_request_is_not_found() {
        assert!(matches!(serve_outcome(None), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_serve_delivered_request_is_already_served() {
        let request = request_with(RequestStatus::Delivered);
        assert_eq!(serve_outcome(Some(&request)).unwrap(), ServeOutcome::AlreadyServed);
    }

    #[test]
    fn test_serve_pending_or_unknown_status_marks_delivered() {
        let pending = request_with(RequestStatus::Pending);
        assert_eq!(serve_outcome(Some(&pending)).unwrap(), ServeOutcome::MarkDelivered);

        let unknown = request_with(RequestStatus::Other("Cooking".to_string()));
        assert_eq!(serve_outcome(Some(&unknown)).unwrap(), ServeOutcome::MarkDelivered);
    }
}
