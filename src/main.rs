//! 회원가입 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! 저장소 백엔드(MongoDB 또는 메모리)를 초기화하고 회원가입 API를 제공합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use tokio_util::sync::CancellationToken;
use user_registration_service::caching::redis::RedisClient;
use user_registration_service::config::{RateLimitConfig, ServerConfig, StorageBackend, StorageConfig};
use user_registration_service::core::errors::{AppResult, ErrorContext};
use user_registration_service::core::state::AppState;
use user_registration_service::db::Database;
use user_registration_service::repositories::reference::reference_repo::ReferenceRepository;
use user_registration_service::repositories::users::user_repo::UserRepository;
use user_registration_service::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 회원가입 서비스 시작중...");

    let shutdown = CancellationToken::new();

    let state = initialize_state(shutdown.clone())
        .await
        .map_err(|e| {
            error!("서비스 초기화 실패: {}", e);
            std::io::Error::other(e.to_string())
        })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(web::Data::new(state), shutdown).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, Rate Limiting, 로깅, 경로 정규화 미들웨어를 포함합니다.
/// Ctrl-C를 받으면 종료 토큰을 취소하여 진행 중인 검증을 중단시킨 뒤 서버를 정지합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, 잘못된 Rate Limit 설정 또는 서버 실행 오류
async fn start_http_server(state: web::Data<AppState>, shutdown: CancellationToken) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Register: POST http://{}/api/users/register", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("잘못된 Rate Limiting 설정"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let server = HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(state.clone())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(4)
        .disable_signals()
        .run();

    let handle = server.handle();
    actix_web::rt::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("🛑 종료 신호 수신, 진행 중인 검증을 취소합니다"),
            Err(e) => error!("종료 신호 대기 실패: {}", e),
        }
        shutdown.cancel();
        handle.stop(true).await;
    });

    server.await
}

fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 설정된 저장소 백엔드로 애플리케이션 상태를 구성합니다
async fn initialize_state(shutdown: CancellationToken) -> AppResult<AppState> {
    match StorageConfig::backend() {
        StorageBackend::Memory => {
            info!("💾 메모리 저장소 사용 (시드 데이터 포함)");
            Ok(AppState::in_memory(shutdown))
        }
        StorageBackend::Mongo => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::connect(&StorageConfig::mongodb_uri(), &StorageConfig::database_name())
                .await
                .context("MongoDB 연결 실패")?;

            let cache = connect_cache().await;

            let reference = ReferenceRepository::new(
                database.clone(),
                cache,
                StorageConfig::reference_cache_ttl_seconds(),
            );
            reference.seed().await.context("참조 데이터 시딩 실패")?;

            let users = UserRepository::new(database);
            users.create_indexes().await.context("users 인덱스 생성 실패")?;
            users.seed().await.context("사용자 시딩 실패")?;

            Ok(AppState::new(Arc::new(reference), Arc::new(users), shutdown))
        }
    }
}

/// `REDIS_URL`이 설정된 경우에만 캐시 연결 (실패 시 캐시 없이 진행)
async fn connect_cache() -> Option<RedisClient> {
    let redis_url = StorageConfig::redis_url()?;

    match RedisClient::connect(&redis_url).await {
        Ok(client) => Some(client),
        Err(e) => {
            warn!("Redis 연결 실패, 캐시 없이 진행합니다: {}", e);
            None
        }
    }
}

fn configure_cors() -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
