//! Users Entity Module
//!
//! 가입이 완료된 사용자 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::{User, normalize_email};
//!
//! let user = User::new_registered(request, date_of_birth);
//! assert_eq!(user.email_normalized, normalize_email(&user.email));
//! ```

pub mod user;
