//! End-to-end scenarios for receipt submission and points lookup, driven through the public
//! service facade and HTTP router.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use receipt_points::receipts::{
    receipt_router, validate, InMemoryPointsRepository, Points, ReceiptPointsService,
    ScoringRule,
};

fn walgreens_receipt() -> Value {
    json!({
        "retailer": "Walgreens",
        "purchaseDate": "2022-01-02",
        "purchaseTime": "08:13",
        "total": "2.65",
        "items": [
            { "shortDescription": "Pepsi - 12-oz", "price": "1.25" },
            { "shortDescription": "Dasani", "price": "1.40" }
        ]
    })
}

fn target_receipt() -> Value {
    json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-02",
        "purchaseTime": "13:13",
        "total": "1.25",
        "items": [
            { "shortDescription": "Pepsi - 12-oz", "price": "1.25" }
        ]
    })
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}

#[test]
fn walgreens_receipt_scores_rule_by_rule() {
    let repository = Arc::new(InMemoryPointsRepository::default());
    let service = ReceiptPointsService::new(repository.clone());

    let processed = service
        .process(&walgreens_receipt())
        .expect("receipt processes");
    let breakdown = &processed.breakdown;

    // "Pepsi - 12-oz" trims to 13 characters and "Dasani" to 6, so only Dasani qualifies.
    assert_eq!(breakdown.points_for(ScoringRule::RetailerName), 9);
    assert_eq!(breakdown.points_for(ScoringRule::ItemPairs), 5);
    assert_eq!(breakdown.points_for(ScoringRule::DescriptionLength), 1);
    assert_eq!(breakdown.points_for(ScoringRule::OddPurchaseDay), 0);
    assert_eq!(breakdown.total, Points(15));
    assert_eq!(repository.len(), 1);
}

#[test]
fn quarter_total_without_round_dollars() {
    let service = ReceiptPointsService::new(Arc::new(InMemoryPointsRepository::default()));

    let processed = service.process(&target_receipt()).expect("receipt processes");

    assert_eq!(processed.breakdown.points_for(ScoringRule::RoundDollarTotal), 0);
    assert_eq!(
        processed
            .breakdown
            .points_for(ScoringRule::QuarterMultipleTotal),
        25
    );
    assert_eq!(processed.breakdown.total, Points(31));
}

#[test]
fn validation_verdicts_are_data() {
    let verdict = validate(&json!({ "retailer": "Target" }));
    assert!(!verdict.is_valid);
    assert_eq!(verdict.message.as_deref(), Some("purchase date is not correct"));

    assert!(validate(&walgreens_receipt()).is_valid);
}

#[tokio::test]
async fn http_flow_stores_only_valid_receipts() {
    let repository = Arc::new(InMemoryPointsRepository::default());
    let service = Arc::new(ReceiptPointsService::new(repository.clone()));
    let router = receipt_router(service);

    let mut invalid = walgreens_receipt();
    invalid["total"] = json!("2.6");

    let response = router
        .clone()
        .oneshot(
            Request::post("/receipts/process")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&invalid).expect("serialize")))
                .expect("request"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(repository.is_empty());

    let response = router
        .clone()
        .oneshot(
            Request::post("/receipts/process")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&walgreens_receipt()).expect("serialize"),
                ))
                .expect("request"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = read_json(response).await["id"]
        .as_str()
        .expect("id string")
        .to_string();
    assert_eq!(repository.len(), 1);

    let response = router
        .oneshot(
            Request::get(format!("/receipts/{id}/points"))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!({ "points": 15 }));
}
