//! End-to-end tests of [`MetrcClient`] over HTTP against a local mock server.

use std::time::Duration;

use metrc::models::{PackageAdjustment, Strain};
use metrc::{Error, LastModified, MetrcClient, MetrcConfig};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> MetrcClient {
    let config = MetrcConfig::new(server.uri(), "V", "U").unwrap();
    MetrcClient::new(&config).unwrap()
}

#[tokio::test]
async fn lists_facilities() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/facilities/v1"))
        .and(header("authorization", "Basic VjpV"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"Id":1,"Name":"Test"}]"#))
        .expect(1)
        .mount(&server)
        .await;

    let facilities = client(&server).facilities().list().await.unwrap();

    assert_eq!(facilities.len(), 1);
    assert_eq!(facilities[0].id, Some(1));
    assert_eq!(facilities[0].name, "Test");
}

#[tokio::test]
async fn unauthorized_keeps_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items/v1/active"))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"Message":"denied"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server).items().active(None).await.unwrap_err();

    assert_eq!(err.status_code(), Some(401));
    assert!(!err.is_transport());
    match err.root() {
        Error::Status { status, body } => {
            assert_eq!(*status, 401);
            assert_eq!(body, r#"{"Message":"denied"}"#);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err
        .to_string()
        .ends_with(r#"response failed with code 401 and body {"Message":"denied"}"#));
}

#[tokio::test]
async fn active_packages_send_license_and_bounds() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/packages/v1/active"))
        .and(query_param("licenseNumber", "C12-1000006-LIC"))
        .and(query_param("lastModifiedStart", "2020-01-01T00:00:00Z"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[{"Id":5,"Label":"1A4FF0100000022000000005","Quantity":12.5,"Item":{"Id":9,"Name":"Buds"}}]"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let start = "2020-01-01T00:00:00Z".parse().unwrap();
    let packages = client(&server)
        .packages()
        .active("C12-1000006-LIC", LastModified::new().with_start(start))
        .await
        .unwrap();

    assert_eq!(packages.len(), 1);
    assert_eq!(packages[0].label, "1A4FF0100000022000000005");
    assert!((packages[0].quantity - 12.5).abs() < f64::EPSILON);
    assert_eq!(packages[0].item.name, "Buds");
}

#[tokio::test]
async fn writes_post_json_bodies() {
    let server = MockServer::start().await;
    let adjustments = vec![PackageAdjustment {
        label: "ABC".to_string(),
        quantity: -1.0,
        unit_of_measure: "Grams".to_string(),
        adjustment_reason: "Drying".to_string(),
        adjustment_date: "2020-01-01".to_string(),
        reason_note: None,
    }];

    Mock::given(method("POST"))
        .and(path("/packages/v1/adjust"))
        .and(query_param("licenseNumber", "C12"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!([{
            "Label": "ABC",
            "Quantity": -1.0,
            "UnitOfMeasure": "Grams",
            "AdjustmentReason": "Drying",
            "AdjustmentDate": "2020-01-01",
            "ReasonNote": null
        }])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let body = client(&server)
        .packages()
        .adjust(&adjustments, "C12")
        .await
        .unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn recorded_body_decodes_to_the_sent_records() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/strains/v1/update"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let strains = vec![Strain {
        id: Some(3),
        name: "Blue Dream".to_string(),
        testing_status: "None".to_string(),
        thc_level: 0.2,
        cbd_level: 0.05,
        indica_percentage: 30.0,
        sativa_percentage: 70.0,
    }];
    client(&server)
        .strains()
        .update(&strains, None)
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    let decoded: Vec<Strain> = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(decoded, strains);
}

#[tokio::test]
async fn delete_returns_response_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/locations/v1/11"))
        .and(query_param("licenseNumber", "C12"))
        .respond_with(ResponseTemplate::new(200).set_body_string("deleted"))
        .expect(1)
        .mount(&server)
        .await;

    let body = client(&server)
        .locations()
        .delete(11, Some("C12"))
        .await
        .unwrap();
    assert_eq!(&body[..], b"deleted");
}

#[tokio::test]
async fn malformed_reply_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/unitsofmeasure/v1/active"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server)
        .units_of_measure()
        .active()
        .await
        .unwrap_err();
    assert!(matches!(err.root(), Error::DeserializationError(_)));
    assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn client_request_timeout_applies_to_calls() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/labtests/v1/states"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("[]")
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let err = client(&server)
        .with_request_timeout(Duration::from_millis(50))
        .lab_tests()
        .states()
        .await
        .unwrap_err();
    assert!(matches!(err.root(), Error::Timeout(_)));
    assert!(err.is_transport());
}
