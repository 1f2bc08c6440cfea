//! # Domain Entities Module
//!
//! MongoDB 컬렉션과 직접 매핑되는 문서 구조체들입니다.
//!
//! ```text
//! entities/
//! ├── users/       ← users 컬렉션 (가입 완료된 사용자)
//! └── reference    ← genders, countries, cities 컬렉션
//! ```
//!
//! 참조 데이터 문서는 정수 id를 `_id`로 사용합니다. 시드 데이터의 id가 요청의
//! `GenderId`, `CountryId`, `CityId`와 그대로 비교되기 때문입니다.

pub mod reference;
pub mod users;

pub use reference::{CityDocument, CountryDocument, GenderDocument};
pub use users::user::User;
