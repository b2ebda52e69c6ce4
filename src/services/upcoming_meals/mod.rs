pub mod upcoming_meal_service;

pub use upcoming_meal_service::UpcomingMealService;
