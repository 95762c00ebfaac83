use axum::{
    Router,
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use bostad_dashboard::models::{
    error::AppError,
    place::AddressKey,
    property::PropertyType,
    user::{Credentials, LoginOutcome, Session},
};
use bostad_dashboard::services::api::{ApiConfig, HousingClient};
use serde::Deserialize;
use serde_json::{Value, json};
use std::collections::HashMap;

fn vacancy(id: u32, position: Option<u32>) -> Value {
    json!({
        "id": id,
        "property_type": "Apartment",
        "area": "Delphi",
        "description": "Lägenhet med balkong",
        "short_description": "2 rum och kök",
        "address": { "street": "Ulrikedalsvägen 4", "city": "Lund", "postal_code": "22458" },
        "floor": 2,
        "size_sqm": 41.5,
        "reserved": false,
        "queue_position": { "position": position, "total_in_queue": 80 },
        "rent": 6125,
        "reserve_from": "2026-10-12",
        "reserve_until": "2026-10-19",
        "move_in": "2026-12-01"
    })
}

#[derive(Deserialize)]
struct LoginBody {
    email: String,
    password: String,
}

async fn login(Json(body): Json<LoginBody>) -> impl IntoResponse {
    match (body.email.as_str(), body.password.as_str()) {
        ("a@b.com", "x") => {
            (StatusCode::OK, Json(json!({ "first_name": "Alva", "last_name": "Berg" })))
                .into_response()
        }
        ("broken@b.com", _) => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        _ => StatusCode::FORBIDDEN.into_response(),
    }
}

async fn vacancy_detail(Path(id): Path<u32>) -> impl IntoResponse {
    if id == 404 {
        return StatusCode::NOT_FOUND.into_response();
    }
    let mut detail = vacancy(id, Some(3));
    detail["facing"] = json!("Söder");
    Json(detail).into_response()
}

async fn geocode(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    if params.get("street").map(String::as_str) == Some("Tornavägen 1") {
        Json(json!([{ "lat": "55.7140", "lon": "13.2120" }]))
    } else {
        Json(json!([]))
    }
}

/// Serves a stand-in housing API on an ephemeral port.
async fn spawn_server(user_status: StatusCode) -> HousingClient {
    let app = Router::new()
        .route("/vacancies", get(|| async { Json(json!([vacancy(1, None), vacancy(2, Some(1))])) }))
        .route("/vacancies/{id}", get(vacancy_detail))
        .route(
            "/user",
            get(move || async move {
                if user_status.is_success() {
                    (user_status, Json(json!({ "first_name": "Alva", "last_name": "Berg" }))).into_response()
                } else {
                    user_status.into_response()
                }
            }),
        )
        .route("/login", post(login))
        .route("/logout", get(|| async { StatusCode::OK }))
        .route("/geocode", get(geocode));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = ApiConfig::builder().base_url(format!("http://{addr}")).build();
    HousingClient::with_config(config).unwrap()
}

#[tokio::test]
async fn test_login_with_valid_credentials() {
    let client = spawn_server(StatusCode::UNAUTHORIZED).await;

    let outcome = client.login(&Credentials::new("a@b.com", "x")).await.unwrap();

    match outcome {
        LoginOutcome::Success(user) => assert_eq!(user.first_name, "Alva"),
        LoginOutcome::InvalidCredentials => panic!("expected a user"),
    }
}

#[tokio::test]
async fn test_login_with_wrong_password_is_not_an_error() {
    let client = spawn_server(StatusCode::UNAUTHORIZED).await;

    let outcome = client.login(&Credentials::new("a@b.com", "wrong")).await;

    assert_eq!(outcome, Ok(LoginOutcome::InvalidCredentials));
}

#[tokio::test]
async fn test_login_server_failure_is_an_error() {
    let client = spawn_server(StatusCode::UNAUTHORIZED).await;

    let outcome = client.login(&Credentials::new("broken@b.com", "x")).await;

    assert!(matches!(outcome, Err(AppError::ApiError(_))));
}

#[tokio::test]
async fn test_session_lookup_treats_failure_as_signed_out() {
    for status in [StatusCode::UNAUTHORIZED, StatusCode::INTERNAL_SERVER_ERROR] {
        let client = spawn_server(status).await;
        assert_eq!(client.current_session().await, Ok(Session::Unauthenticated));
    }

    let client = spawn_server(StatusCode::OK).await;
    let session = client.current_session().await.unwrap();
    assert_eq!(session.user().map(|u| u.initials()), Some("AB".to_string()));
}

#[tokio::test]
async fn test_vacancy_list_decodes() {
    let client = spawn_server(StatusCode::UNAUTHORIZED).await;

    let vacancies = client.list_vacancies().await.unwrap();

    assert_eq!(vacancies.len(), 2);
    assert_eq!(vacancies[0].queue_position.position, None);
    assert_eq!(vacancies[1].queue_position.position, Some(1));
    assert_eq!(vacancies[1].property_type, PropertyType::Apartment);
}

#[tokio::test]
async fn test_vacancy_detail_carries_facing() {
    let client = spawn_server(StatusCode::UNAUTHORIZED).await;

    let detail = client.vacancy(7).await.unwrap();
    assert_eq!(detail.id, 7);
    assert_eq!(detail.facing.as_deref(), Some("Söder"));

    let missing = client.vacancy(404).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_geocode_empty_answer_is_no_result() {
    let client = spawn_server(StatusCode::UNAUTHORIZED).await;
    let address = |street: &str| AddressKey {
        street: street.to_string(),
        postal_code: "22363".to_string(),
        city: "Lund".to_string(),
    };

    let place = client.geocode(&address("Tornavägen 1")).await.unwrap();
    assert!((place.lat - 55.714).abs() < 1e-9);

    let missing = client.geocode(&address("Okänd gata 9")).await;
    assert!(matches!(missing, Err(AppError::NoResult(_))));
}

#[tokio::test]
async fn test_logout_succeeds() {
    let client = spawn_server(StatusCode::UNAUTHORIZED).await;
    assert_eq!(client.logout().await, Ok(()));
}
