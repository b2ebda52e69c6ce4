pub mod premium_service;

pub use premium_service::PremiumService;
