//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 캐시와 JSON 기반 객체 직렬화를 제공합니다.
//!
//! # 캐시 키
//!
//! - `meal:{id}` - 식단 단건 조회 (식단 변경 시 무효화)
//! - `premium:all`, `premium:{id}` - 프리미엄 패키지 (읽기 전용)
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use meal_mate_backend::caching::redis::RedisClient;
//!
//! let cache = RedisClient::new().await?;
//! cache.set_with_expiry("premium:all", &packages, 600).await?;
//! let cached: Option<Vec<PremiumPackage>> = cache.get("premium:all").await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! CACHE_TTL_SECONDS=600             # 기본값
//! ```

pub mod redis;
