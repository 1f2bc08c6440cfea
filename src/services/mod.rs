//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 구현체를 트레이트 객체(`Arc<dyn ...>`)로 주입받으므로
//! MongoDB와 메모리 저장소를 같은 코드로 다룹니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::user_service::RegistrationService;
//!
//! let service = RegistrationService::new(reference, users);
//! let user = service.register(request, &cancel).await?;
//! ```

pub mod users;
