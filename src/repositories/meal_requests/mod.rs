pub mod meal_request_repo;

pub use meal_request_repo::MealRequestRepository;
