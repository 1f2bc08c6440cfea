//! # Core Module
//!
//! 애플리케이션 전역에서 공유되는 핵심 구성 요소입니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web ResponseError 구현
//! - **자동 변환**: 검증 엔진/저장소 에러로부터의 `From` 변환
//!
//! ### [`state`] - 애플리케이션 상태
//! - **AppState**: 서비스, 종료 토큰, 요청별 설정을 묶어 `web::Data`로 공유
//! - 저장소 구현체는 `main`에서 한 번 결정되어 트레이트 객체로 주입됩니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::core::state::AppState;
//!
//! let state = web::Data::new(AppState::in_memory(shutdown.clone()));
//!
//! App::new()
//!     .app_data(state.clone())
//!     .configure(configure_all_routes);
//! ```

pub mod errors;
pub mod state;

pub use errors::*;
pub use state::*;
