//! Premium Package HTTP Handlers (읽기 전용)

use actix_web::{get, web, HttpResponse};
use crate::core::errors::AppError;
use crate::services::premium::PremiumService;

#[get("/premium")]
pub async fn list_packages() -> Result<HttpResponse, AppError> {
    let packages = PremiumService::instance().list_packages().await?;
    Ok(HttpResponse::Ok().json(packages))
}

#[get("/premium/{id}")]
pub async fn get_package(id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let package = PremiumService::instance().get_package(&id).await?;
    Ok(HttpResponse::Ok().json(package))
}
