//! 참조 데이터(성별, 국가, 도시) 리포지토리 모듈
//!
//! [`ReferenceRepository`](reference_repo::ReferenceRepository)를 통해 MongoDB 기반 참조 데이터 조회와
//! Redis 캐싱을 제공합니다.

pub mod reference_repo;
