pub mod premium_repo;

pub use premium_repo::PremiumPackageRepository;
