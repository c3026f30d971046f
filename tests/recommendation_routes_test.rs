mod common;

use actix_web::test;
use serde_json::{json, Value};

use common::TestApp;

#[actix_rt::test]
async fn test_hand_authored_recommendations() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/recommendations")
        .set_json(&json!({
            "destination_country": "France",
            "budget_type": "luxury",
            "interests": ["food", "art"]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["source"], "fallback");
    assert_eq!(body["country"], "France");
    let recommendations = body["recommendations"].as_array().unwrap();
    assert_eq!(recommendations.len(), 3);
    assert_eq!(recommendations[0]["destination"], "Paris");
}

#[actix_rt::test]
async fn test_recommendations_in_local_currency() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/recommendations")
        .set_json(&json!({"destination_country": "Thailand"}))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let first = &body["recommendations"][0];
    assert_eq!(first["destination"], "Bangkok");
    assert_eq!(first["estimated_budget"]["accommodation"], 1400);
}

#[actix_rt::test]
async fn test_unknown_country_gets_generic_candidate() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/recommendations")
        .set_json(&json!({"destination_country": "Narnia", "budget_type": "budget"}))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let recommendations = body["recommendations"].as_array().unwrap();
    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0]["destination"], "Capital of Narnia");
    assert_eq!(recommendations[0]["best_time_to_visit"], "Year-round");
    for reason in recommendations[0]["reasons"].as_array().unwrap() {
        assert!(reason.as_str().unwrap().contains("Narnia"));
    }
}

#[actix_rt::test]
async fn test_fixture_catalog_generic_candidate() {
    let test_app = TestApp::fixture();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/recommendations")
        .set_json(&json!({"destination_country": "Freedonia"}))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["recommendations"][0]["destination"], "Fredville");
    assert_eq!(body["recommendations"][0]["highlights"][0], "Old Palace");

    let req = test::TestRequest::post()
        .uri("/api/recommendations")
        .set_json(&json!({"destination_country": "Sylvania"}))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["recommendations"][0]["destination"], "Capital of Sylvania");
}

#[actix_rt::test]
async fn test_invalid_requests_are_rejected() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/recommendations")
        .set_json(&json!({"destination_country": "  "}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);

    let req = test::TestRequest::post()
        .uri("/api/recommendations")
        .set_json(&json!({"destination_country": "Japan", "budget_type": "premium"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);
}

#[actix_rt::test]
async fn test_fallback_itinerary() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/itineraries")
        .set_json(&json!({
            "destination": "Kyoto",
            "destination_country": "Japan",
            "budget": 20000,
            "start_date": "2025-04-01",
            "end_date": "2025-04-04"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["source"], "fallback");
    assert_eq!(body["destination"], "Kyoto");
    let days = body["itinerary"]["daily_activities"].as_array().unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0]["date"], "2025-04-01");
    assert_eq!(days[1]["date"], "2025-04-02");
    assert!(body["itinerary"]["budget_breakdown"]["total"].as_u64().unwrap() > 0);
}

#[actix_rt::test]
async fn test_itinerary_requires_destination() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/itineraries")
        .set_json(&json!({"destination": "", "destination_country": "Japan"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);
}

#[actix_rt::test]
async fn test_fallback_tips() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/tips")
        .set_json(&json!({"destination": "Lisbon", "destination_country": "Portugal"}))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["source"], "fallback");
    assert_eq!(body["tips"].as_array().unwrap().len(), 7);
}
