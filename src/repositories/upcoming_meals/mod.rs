pub mod upcoming_meal_repo;

pub use upcoming_meal_repo::UpcomingMealRepository;
