use axum::{
    extract::Path,
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use gateway::GatewayClient;
use serde_json::{json, Value};
use shared_types::OfficeConfig;
use tokio::net::TcpListener;

pub const BYPASS_HEADER: &str = "ngrok-skip-browser-warning";

/// Photo prefix the test clients are configured with.
pub const PHOTO_BASE: &str = "https://files.test/photos";

type Reply = (StatusCode, Json<Value>);

/// Mirrors the tunnel's interstitial: requests without the bypass header
/// get a 403 instead of the resource.
fn guarded(headers: &HeaderMap, body: Value) -> Reply {
    let bypassed = headers
        .get(BYPASS_HEADER)
        .and_then(|v| v.to_str().ok())
        == Some("true");
    if bypassed {
        (StatusCode::OK, Json(body))
    } else {
        (StatusCode::FORBIDDEN, Json(json!({ "error": "browser warning" })))
    }
}

pub fn user_body(id: i64) -> Value {
    json!({
        "id": id,
        "telegram_id": id,
        "full_name": "Jane Roe",
        "email": "jane@firm.test",
        "phone": "",
        "departments": "Litigation Department",
        "position": "Associate",
        "role": "Commercial Litigation"
    })
}

pub fn cases_body() -> Value {
    json!({
        "cases": [
            {
                "id": 10,
                "case_number": "CL-2025-010",
                "title": "Acme v. Widget Co",
                "client_name": "Acme Ltd",
                "case_type": "Corporate",
                "status": "active",
                "priority": "high",
                "next_court_date": "2025-12-15T09:00:00",
                "deadline": null
            },
            {
                "id": 11,
                "case_number": "CL-2025-011",
                "title": "Estate of Brown",
                "client_name": null,
                "case_type": "Family",
                "status": "closed",
                "priority": "low"
            },
            {
                "id": 12,
                "case_number": "CL-2025-012",
                "title": "People v. Green",
                "client_name": "Tom Green",
                "case_type": "Criminal",
                "status": "active",
                "priority": "urgent",
                "deadline": "2025-12-20T17:00:00"
            }
        ]
    })
}

pub fn agenda_body() -> Value {
    json!({
        "court_dates": [
            {
                "id": 1,
                "case_number": "CL-2025-010",
                "court_name": "District Court",
                "hearing_date": "2025-12-15T10:00:00",
                "purpose": "Motion hearing"
            },
            {
                "court_name": "Appeals Court",
                "hearing_date": "next week",
                "purpose": null
            }
        ],
        "tasks": [
            { "id": 3, "title": "File reply brief", "due_date": "2025-12-12", "status": "pending" }
        ],
        "time_entries": [],
        "total_hours": 12.5
    })
}

pub fn notifications_body() -> Value {
    json!({
        "notifications": [
            {
                "id": 1,
                "title": "Hearing moved",
                "message": "Acme hearing moved to 10:00",
                "notification_type": "court",
                "priority": "urgent",
                "created_at": "2025-12-01T14:30:00"
            },
            {
                "id": 2,
                "title": "Newsletter",
                "message": "December edition",
                "priority": "normal",
                "created_at": "yesterday"
            }
        ]
    })
}

pub fn staff_body() -> Value {
    json!({
        "staff": [
            {
                "id": 5,
                "full_name": "Ann Lee",
                "position": "Paralegal",
                "departments": "Litigation Department",
                "photo_file_id": "photo-5",
                "latitude": 40.7,
                "longitude": -74.0,
                "last_seen": "2025-12-01T08:05:00",
                "is_online": true
            },
            {
                "id": 6,
                "full_name": "Bo Chen",
                "position": null,
                "photo_file_id": null,
                "last_seen": null,
                "is_online": false
            }
        ]
    })
}

/// Fake office backend serving every resource under `/api`.
pub fn office_router() -> Router {
    Router::new()
        .route(
            "/api/user/{id}",
            get(|headers: HeaderMap, Path(id): Path<i64>| async move {
                guarded(&headers, user_body(id))
            }),
        )
        .route(
            "/api/cases/{id}",
            get(|headers: HeaderMap| async move { guarded(&headers, cases_body()) }),
        )
        .route(
            "/api/agenda/{id}",
            get(|headers: HeaderMap| async move { guarded(&headers, agenda_body()) }),
        )
        .route(
            "/api/notifications",
            get(|headers: HeaderMap| async move { guarded(&headers, notifications_body()) }),
        )
        .route(
            "/api/staff",
            get(|headers: HeaderMap| async move { guarded(&headers, staff_body()) }),
        )
}

/// Backend answering every request with `status`.
pub fn failing_router(status: StatusCode) -> Router {
    Router::new().fallback(move || async move { (status, "backend unavailable") })
}

/// Backend answering 200 with a body that is not JSON.
pub fn garbage_router() -> Router {
    Router::new().fallback(|| async { (StatusCode::OK, "<html>tunnel warning</html>") })
}

/// Serve `router` on an ephemeral port and return its API base URL.
pub async fn spawn_backend(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test backend stopped");
    });
    format!("http://{}/api", addr)
}

/// Base URL of a port nothing listens on.
pub async fn dead_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");
    drop(listener);
    format!("http://{}/api", addr)
}

pub fn client_for(base_url: &str) -> GatewayClient {
    GatewayClient::new(OfficeConfig {
        api_base_url: base_url.to_string(),
        photo_file_base: PHOTO_BASE.to_string(),
        ..OfficeConfig::default()
    })
}

/// Client whose bypass header the fake backend will reject.
pub fn client_without_bypass(base_url: &str) -> GatewayClient {
    let mut config = OfficeConfig {
        api_base_url: base_url.to_string(),
        ..OfficeConfig::default()
    };
    config.bypass_header.value = "false".to_string();
    GatewayClient::new(config)
}
