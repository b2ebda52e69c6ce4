//! 식단과 식단에 내장된 리뷰를 다루는 서비스

pub mod meal_service;
pub mod review_service;

pub use meal_service::MealService;
pub use review_service::ReviewService;
