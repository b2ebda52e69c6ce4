//! Meal Mate 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! MongoDB, Redis, Stripe 클라이언트를 준비한 뒤 REST API를 제공합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use meal_mate_backend::caching::redis::RedisClient;
use meal_mate_backend::config::{Environment, RateLimitConfig, ServerConfig};
use meal_mate_backend::core::registry::ServiceLocator;
use meal_mate_backend::db::Database;
use meal_mate_backend::routes::configure_all_routes;
use meal_mate_backend::services::payments::StripeClient;
use meal_mate_backend::utils::display_terminal::print_server_banner;

#[actix_web::main]
async fn main() -> io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 Meal Mate 서버 시작중...");

    let (database, redis_client) = initialize_data_stores().await?;
    let stripe_client = StripeClient::new()
        .map(Arc::new)
        .map_err(|e| {
            error!("Stripe 클라이언트 생성 실패: {}", e);
            io::Error::other(e.to_string())
        })?;

    // ServiceLocator에 핵심 의존성 등록
    ServiceLocator::set(database);
    ServiceLocator::set(redis_client);
    ServiceLocator::set(stripe_client);

    ServiceLocator::initialize_all()
        .await
        .map_err(|e| {
            error!("서비스 초기화 실패: {}", e);
            io::Error::other(e.to_string())
        })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server().await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 적용합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server() -> io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
    let allowed_origins = ServerConfig::cors_allowed_origins();

    let rate_limit = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit.per_second)
        .burst_size(rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다 (0 값 불가)"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit.per_second,
        rate_limit.burst_size
    );

    print_server_banner(&bind_address, Environment::current().as_str());

    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// ```bash
/// RUST_LOG=meal_mate_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
    info!("Current profile: {}", std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string()));
}

/// MongoDB와 Redis 연결을 초기화합니다
///
/// # Errors
///
/// 어느 한쪽이라도 연결에 실패하면 서버를 시작하지 않습니다.
async fn initialize_data_stores() -> io::Result<(Arc<Database>, Arc<RedisClient>)> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new()
        .await
        .map(Arc::new)
        .map_err(|e| {
            error!("MongoDB 연결 실패: {}", e);
            io::Error::other(e.to_string())
        })?;

    let redis_client = RedisClient::new()
        .await
        .map(Arc::new)
        .map_err(|e| {
            error!("Redis 연결 실패: {}", e);
            io::Error::other(e.to_string())
        })?;

    Ok((database, redis_client))
}

/// CORS 설정을 구성합니다
///
/// `CORS_ALLOWED_ORIGINS`가 비어 있으면 모든 Origin을 허용합니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    let cors = if allowed_origins.is_empty() {
        Cors::default().allow_any_origin()
    } else {
        allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .supports_credentials()
    };

    cors.allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
