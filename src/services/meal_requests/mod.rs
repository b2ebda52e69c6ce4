pub mod meal_request_service;

pub use meal_request_service::MealRequestService;
