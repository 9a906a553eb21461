//! Exercises the real HTTP client against an in-process mock of the scoring
//! service.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use fin_core::{FinancialInput, RiskCategory, ScoringService, ServiceError};
use fin_http::HttpScoringService;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tokio::net::TcpListener;

type Captured = Arc<Mutex<Option<Value>>>;

async fn spawn(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn service_for(addr: SocketAddr) -> HttpScoringService {
    HttpScoringService::new(&format!("http://{addr}"), None).unwrap()
}

fn sample_input() -> FinancialInput {
    FinancialInput {
        monthly_income: 100000.0,
        monthly_expenses: 50000.0,
        loan_emi: 20000.0,
        savings: 20000.0,
        investments: 10000.0,
    }
}

async fn predict_ok(
    State(captured): State<Captured>,
    Json(body): Json<Value>,
) -> Json<Value> {
    *captured.lock().unwrap() = Some(body);
    Json(json!({
        "financial_score": 72,
        "risk_category": "Moderate",
        "probabilities": {"Good": 20.0, "Moderate": 70.0, "Risky": 10.0}
    }))
}

async fn history_ok() -> Json<Value> {
    let rows: Vec<Value> = (1..=7)
        .rev()
        .map(|id| {
            json!({
                "id": id,
                "monthly_income": 80000.0,
                "monthly_expenses": 40000.0,
                "loan_emi": 10000.0,
                "savings": 20000.0,
                "investments": 10000.0,
                "financial_score": 70.5,
                "risk_category": "Good",
                "created_at": format!("2025-02-0{id} 10:00:00.000000")
            })
        })
        .collect();
    Json(Value::Array(rows))
}

async fn model_missing() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "Model not loaded"})),
    )
}

async fn not_json() -> &'static str {
    "<html>maintenance</html>"
}

#[tokio::test]
async fn predict_posts_wire_keys_and_parses_response() {
    let captured: Captured = Arc::default();
    let app = Router::new()
        .route("/predict", post(predict_ok))
        .with_state(captured.clone());
    let service = service_for(spawn(app).await);

    let prediction = service.predict(&sample_input()).await.unwrap();

    assert_eq!(prediction.financial_score, 72.0);
    assert_eq!(prediction.risk_category, RiskCategory::Moderate);
    assert_eq!(
        prediction.probabilities.unwrap().get("Moderate"),
        Some(&70.0)
    );

    let body = captured.lock().unwrap().clone().unwrap();
    assert_eq!(
        body,
        json!({
            "monthly_income": 100000.0,
            "monthly_expenses": 50000.0,
            "loan_emi": 20000.0,
            "savings": 20000.0,
            "investments": 10000.0
        })
    );
}

#[tokio::test]
async fn history_returns_every_row_in_service_order() {
    let app = Router::new().route("/history", get(history_ok));
    let service = service_for(spawn(app).await);

    let rows = service.history().await.unwrap();

    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0].id, Some(7));
    assert_eq!(rows[0].risk_category, RiskCategory::Good);
    assert_eq!(rows[6].created_at, "2025-02-01 10:00:00.000000");
}

#[tokio::test]
async fn server_error_maps_to_status() {
    let app = Router::new().route("/predict", post(model_missing));
    let service = service_for(spawn(app).await);

    let err = service.predict(&sample_input()).await.unwrap_err();

    match err {
        ServiceError::Status { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("Model not loaded"));
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn unknown_route_maps_to_status() {
    let app = Router::new();
    let service = service_for(spawn(app).await);

    let err = service.history().await.unwrap_err();

    assert!(matches!(err, ServiceError::Status { status: 404, .. }));
}

#[tokio::test]
async fn malformed_body_maps_to_decode() {
    let app = Router::new().route("/history", get(not_json));
    let service = service_for(spawn(app).await);

    let err = service.history().await.unwrap_err();

    assert!(matches!(err, ServiceError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn refused_connection_maps_to_transport() {
    // Bind then drop to get a port with nothing listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let service = service_for(addr);

    let err = service.predict(&sample_input()).await.unwrap_err();

    assert!(matches!(err, ServiceError::Transport(_)), "got {err:?}");
}
