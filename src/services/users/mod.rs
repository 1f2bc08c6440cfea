//! 사용자 가입 서비스 모듈

pub mod user_service;
