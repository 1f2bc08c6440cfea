//! 애플리케이션 상태
//!
//! 핸들러가 `web::Data<AppState>`로 꺼내 쓰는 공유 상태입니다.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::config::{ResponseConfig, ValidationConfig};
use crate::repositories::UserStore;
use crate::repositories::memory::InMemoryStore;
use crate::services::users::user_service::RegistrationService;
use crate::validation::port::ReferenceDataPort;

#[derive(Clone)]
pub struct AppState {
    pub registration: RegistrationService,
    /// 서버 종료 시 취소되는 루트 토큰. 요청마다 자식 토큰을 만들어 사용합니다.
    pub shutdown: CancellationToken,
    pub validation_timeout: Duration,
    pub echo_password: bool,
}

impl AppState {
    /// 환경 설정을 읽어 상태 생성
    pub fn new(
        reference: Arc<dyn ReferenceDataPort>,
        users: Arc<dyn UserStore>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            registration: RegistrationService::new(reference, users),
            shutdown,
            validation_timeout: ValidationConfig::timeout(),
            echo_password: ResponseConfig::echo_password(),
        }
    }

    /// 시드된 메모리 저장소를 사용하는 상태
    pub fn in_memory(shutdown: CancellationToken) -> Self {
        let store = Arc::new(InMemoryStore::seeded());

        Self::new(store.clone(), store, shutdown)
    }

    pub fn with_validation_timeout(mut self, timeout: Duration) -> Self {
        self.validation_timeout = timeout;
        self
    }

    pub fn with_echo_password(mut self, echo_password: bool) -> Self {
        self.echo_password = echo_password;
        self
    }
}
