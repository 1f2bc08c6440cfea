//! 사용자 가입 핸들러
//!
//! `POST /api/users/register`
//!
//! - 200: 생성된 사용자 ([`UserResponse`])
//! - 400: `{"Errors": [{"Field": ..., "Error": ...}]}`
//! - 500: 참조 데이터/DB 장애 (일반 메시지)
//! - 503: 검증 타임아웃 또는 서버 종료로 취소됨

use actix_web::{HttpResponse, post, web};
use log::info;

use crate::core::errors::AppError;
use crate::core::state::AppState;
use crate::domain::dto::users::request::RegisterUserRequest;
use crate::domain::dto::users::response::UserResponse;

#[post("/register")]
pub async fn register_user(
    state: web::Data<AppState>,
    payload: web::Json<RegisterUserRequest>,
) -> Result<HttpResponse, AppError> {
    // 서버 종료 토큰의 자식: 종료 또는 타임아웃 중 먼저 오는 쪽이 평가를 취소
    let cancel = state.shutdown.child_token();
    let deadline = cancel.clone();
    let timeout = state.validation_timeout;

    let timer = actix_web::rt::spawn(async move {
        actix_web::rt::time::sleep(timeout).await;
        info!("validation deadline of {:?} reached", timeout);
        deadline.cancel();
    });

    let outcome = state
        .registration
        .register(payload.into_inner(), &cancel)
        .await;
    timer.abort();

    let user = outcome?;

    Ok(HttpResponse::Ok().json(UserResponse::from_user(user, state.echo_password)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test, web};
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use tokio_util::sync::CancellationToken;

    use crate::core::state::AppState;
    use crate::repositories::memory::InMemoryStore;
    use crate::routes::configure_all_routes;
    use crate::validation::port::{CountryWithCities, PortError, ReferenceDataPort};

    fn valid_body() -> Value {
        json!({
            "FirstName": "John",
            "LastName": "Doe",
            "Email": "john@new.com",
            "Password": "Secure1",
            "ConfirmPassword": "Secure1",
            "DateOfBirth": "2000-01-01",
            "PhoneNumber": "1234567890",
            "GenderId": 1,
            "CountryId": 1,
            "CityId": 1
        })
    }

    async fn post_register(state: AppState, body: &Value) -> (StatusCode, Value) {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_all_routes),
        )
        .await;

        let request = actix_test::TestRequest::post()
            .uri("/api/users/register")
            .set_json(body)
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        let status = response.status();
        let bytes = actix_test::read_body(response).await;

        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    /// 참조 데이터 조회가 끝나지 않는 포트
    struct StalledPort;

    #[async_trait]
    impl ReferenceDataPort for StalledPort {
        async fn gender_exists(&self, _: i32) -> Result<bool, PortError> {
            std::future::pending().await
        }

        async fn find_country_with_cities(&self, _: i32) -> Result<Option<CountryWithCities>, PortError> {
            std::future::pending().await
        }

        async fn email_exists(&self, _: &str) -> Result<bool, PortError> {
            std::future::pending().await
        }
    }

    struct BrokenPort;

    #[async_trait]
    impl ReferenceDataPort for BrokenPort {
        async fn gender_exists(&self, _: i32) -> Result<bool, PortError> {
            Err(PortError::Unavailable("mongodb://10.0.0.5 timed out".to_string()))
        }

        async fn find_country_with_cities(&self, _: i32) -> Result<Option<CountryWithCities>, PortError> {
            Ok(None)
        }

        async fn email_exists(&self, _: &str) -> Result<bool, PortError> {
            Ok(false)
        }
    }

    #[actix_web::test]
    async fn test_register_success_returns_created_user() {
        let state = AppState::in_memory(CancellationToken::new()).with_echo_password(true);

        let (status, body) = post_register(state, &valid_body()).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["UserId"].as_str().is_some_and(|id| !id.is_empty()));
        assert_eq!(body["Email"], "john@new.com");
        assert_eq!(body["Password"], "Secure1");
        assert_eq!(body["DateOfBirth"], "2000-01-01");
        assert!(body.get("ConfirmPassword").is_none());
    }

    #[actix_web::test]
    async fn test_register_success_without_password_echo() {
        let state = AppState::in_memory(CancellationToken::new()).with_echo_password(false);

        let (status, body) = post_register(state, &valid_body()).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.get("Password").is_none());
    }

    #[actix_web::test]
    async fn test_register_existing_email() {
        let mut body = valid_body();
        body["Email"] = json!("pranaya.rout@example.com");

        let (status, body) =
            post_register(AppState::in_memory(CancellationToken::new()), &body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "Errors": [{ "Field": "Email", "Error": "Email must be unique." }] })
        );
    }

    #[actix_web::test]
    async fn test_register_empty_body_lists_errors_in_order() {
        let (status, body) =
            post_register(AppState::in_memory(CancellationToken::new()), &json!({})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);

        let fields: Vec<&str> = body["Errors"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|e| e["Field"].as_str())
            .collect();
        assert_eq!(
            fields,
            vec![
                "FirstName",
                "LastName",
                "Email",
                "Password",
                "PhoneNumber",
                "DateOfBirth",
                "GenderId",
                "CountryId"
            ]
        );
    }

    #[actix_web::test]
    async fn test_register_mismatch_and_wrong_city() {
        let mut body = valid_body();
        body["ConfirmPassword"] = json!("Other1");
        body["CityId"] = json!(4);

        let (status, body) =
            post_register(AppState::in_memory(CancellationToken::new()), &body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "Errors": [
                { "Field": "", "Error": "Confirm Password must match Password." },
                { "Field": "CityId", "Error": "The selected city does not belong to the country 'USA'." }
            ] })
        );
    }

    #[actix_web::test]
    async fn test_port_failure_returns_generic_500() {
        let store = Arc::new(InMemoryStore::seeded());
        let state = AppState::new(Arc::new(BrokenPort), store, CancellationToken::new());

        let (status, body) = post_register(state, &valid_body()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal server error" }));
    }

    #[actix_web::test]
    async fn test_validation_timeout_returns_503() {
        let store = Arc::new(InMemoryStore::seeded());
        let state = AppState::new(Arc::new(StalledPort), store, CancellationToken::new())
            .with_validation_timeout(Duration::from_millis(20));

        let (status, _) = post_register(state, &valid_body()).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn test_shutdown_cancels_registration() {
        let shutdown = CancellationToken::new();
        shutdown.cancel();

        let (status, _) = post_register(AppState::in_memory(shutdown), &valid_body()).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
