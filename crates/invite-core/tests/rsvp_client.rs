//! RSVP client against an in-process mock backend.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use invite_core::{RsvpClient, RsvpDraft, RsvpError, RsvpRequest};
use parking_lot::Mutex;
use serde_json::{json, Value};

#[derive(Default)]
struct Backend {
    received: Mutex<Vec<RsvpRequest>>,
}

async fn create_rsvp(
    State(backend): State<Arc<Backend>>,
    Json(request): Json<RsvpRequest>,
) -> (StatusCode, Json<Value>) {
    if request.name.eq_ignore_ascii_case("duplicate") {
        return (
            StatusCode::OK,
            Json(json!({
                "message": "RSVP updated successfully",
                "name": request.name,
                "attending": request.attending,
                "comment": request.comment,
            })),
        );
    }
    if request.name == "boom" {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Internal server error", "status_code": 500})),
        );
    }

    backend.received.lock().push(request.clone());
    (
        StatusCode::OK,
        Json(json!({
            "message": "RSVP submitted successfully",
            "id": "5f0c2a9e-0000-4000-8000-000000000001",
            "name": request.name,
            "attending": request.attending,
            "comment": request.comment,
            "timestamp": "2026-01-10T12:00:00",
        })),
    )
}

async fn stats(State(backend): State<Arc<Backend>>) -> Json<Value> {
    let received = backend.received.lock();
    let attending = received.iter().filter(|r| r.attending).count();
    Json(json!({
        "total": received.len(),
        "attending": attending,
        "not_attending": received.len() - attending,
        "response_rate": "2.0%",
    }))
}

async fn spawn_backend() -> (String, Arc<Backend>) {
    let backend = Arc::new(Backend::default());
    let app = Router::new()
        .route("/api/rsvp", post(create_rsvp))
        .route("/api/rsvp/stats", get(stats))
        .with_state(Arc::clone(&backend));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), backend)
}

fn request(name: &str, attending: bool, comment: &str) -> RsvpRequest {
    RsvpDraft {
        name: name.to_string(),
        attending: Some(attending),
        comment: comment.to_string(),
    }
    .validate()
    .unwrap()
}

#[tokio::test]
async fn test_submit_new_rsvp() {
    let (url, backend) = spawn_backend().await;
    let client = RsvpClient::new(&url).unwrap();

    let receipt = client
        .submit(&request("María Santos", true, "¡Muy emocionada!"))
        .await
        .unwrap();

    assert_eq!(receipt.name, "María Santos");
    assert!(receipt.attending);
    assert!(!receipt.is_update());
    assert_eq!(receipt.comment.as_deref(), Some("¡Muy emocionada!"));

    let received = backend.received.lock();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].comment.as_deref(), Some("¡Muy emocionada!"));
}

#[tokio::test]
async fn test_repeat_rsvp_is_reported_as_update() {
    let (url, _backend) = spawn_backend().await;
    let client = RsvpClient::new(&url).unwrap();

    let receipt = client.submit(&request("duplicate", false, "")).await.unwrap();
    assert!(receipt.is_update());
    assert_eq!(receipt.comment, None);
}

#[tokio::test]
async fn test_server_error_message_is_surfaced() {
    let (url, _backend) = spawn_backend().await;
    let client = RsvpClient::new(&url).unwrap();

    let err = client.submit(&request("boom", true, "")).await.unwrap_err();
    match &err {
        RsvpError::Rejected { status, message } => {
            assert_eq!(*status, 500);
            assert_eq!(message, "Internal server error");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
    assert_eq!(err.toast_title(), "Error en el Envío");
}

#[tokio::test]
async fn test_unknown_route_without_error_body() {
    let (url, _backend) = spawn_backend().await;
    let client = RsvpClient::new(&format!("{url}/missing-prefix")).unwrap();

    let err = client.submit(&request("Juan", true, "")).await.unwrap_err();
    match err {
        RsvpError::Rejected { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Error al enviar confirmación");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_connection_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = RsvpClient::new(&format!("http://{}", addr)).unwrap();
    let err = client.submit(&request("Juan", true, "")).await.unwrap_err();
    assert!(matches!(err, RsvpError::Connection(_)));
    assert_eq!(err.toast_title(), "Error de Conexión");
}

#[tokio::test]
async fn test_stats_reflect_submissions() {
    let (url, _backend) = spawn_backend().await;
    let client = RsvpClient::new(&url).unwrap();

    client.submit(&request("Ana García", false, "")).await.unwrap();
    client.submit(&request("Juan Pérez", true, "")).await.unwrap();

    let stats = client.stats().await.unwrap();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.attending, 1);
    assert_eq!(stats.not_attending, 1);
}
