use pano_core::entities::ApiKeyStatus;
use serde_json::Value;

use super::*;
use crate::web::tests::prelude::*;

fn valid_cfg() -> Cfg {
    Cfg {
        api_key_status: ApiKeyStatus::Valid,
        ..Default::default()
    }
}

fn invalid_cfg() -> Cfg {
    Cfg {
        api_key_status: ApiKeyStatus::Invalid,
        ..Default::default()
    }
}

fn test_json(r: &LocalResponse) {
    assert_eq!(
        r.headers().get("Content-Type").collect::<Vec<_>>()[0],
        "application/json"
    );
}

fn json_body(r: LocalResponse) -> Value {
    serde_json::from_str(&r.into_string().unwrap()).unwrap()
}

fn assert_timestamp_format(ts: &Value) {
    let ts = ts.as_str().unwrap();
    // YYYY-MM-DD HH:MM:SS
    assert_eq!(19, ts.len());
    assert_eq!(b'-', ts.as_bytes()[4]);
    assert_eq!(b' ', ts.as_bytes()[10]);
    assert_eq!(b':', ts.as_bytes()[13]);
}

#[test]
fn get_api_info() {
    let gws = TestGateways::with_panorama("pano123");
    let client = setup(invalid_cfg(), &gws);
    let res = client.get("/").dispatch();
    assert_eq!(res.status(), Status::Ok);
    test_json(&res);
    let body = json_body(res);
    assert_eq!(body["api"], "Random Location Panorama API");
    assert_eq!(body["status"], "running");
    assert_eq!(body["api_key_status"], "invalid");
    assert_eq!(
        body["endpoints"]["/api/random-location"],
        "Get a random location with panorama"
    );
    assert_eq!(body["endpoints"]["/health"], "Health check endpoint");
    assert_timestamp_format(&body["timestamp"]);
    assert_eq!(0, gws.metadata_calls());
}

#[test]
fn get_health() {
    let gws = TestGateways::with_panorama("pano123");
    let client = setup(valid_cfg(), &gws);
    let res = client.get("/health").dispatch();
    assert_eq!(res.status(), Status::Ok);
    test_json(&res);
    let body = json_body(res);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["api_key_status"], "valid");
    assert_timestamp_format(&body["timestamp"]);
}

#[test]
fn random_location_with_invalid_api_key() {
    let gws = TestGateways::with_panorama("pano123");
    let client = setup(invalid_cfg(), &gws);
    let res = client.get("/api/random-location").dispatch();
    assert_eq!(res.status(), Status::InternalServerError);
    test_json(&res);
    let body = json_body(res);
    assert_eq!(body["status"], "error");
    assert_eq!(
        body["message"],
        "Google Maps API key validation failed. Please check your API key configuration."
    );
    assert_timestamp_format(&body["timestamp"]);
    assert_eq!(0, gws.metadata_calls());
    assert_eq!(0, gws.image_calls());
    assert!(gws.db.panoramas.lock().unwrap().is_empty());
}

#[test]
fn discover_random_location() {
    let gws = TestGateways::with_panorama("pano123");
    let client = setup(valid_cfg(), &gws);
    let res = client.get("/api/random-location").dispatch();
    assert_eq!(res.status(), Status::Ok);
    test_json(&res);
    let body = json_body(res);
    assert_eq!(body["status"], "success");
    assert_timestamp_format(&body["timestamp"]);

    let records = gws.db.panoramas.lock().unwrap();
    assert_eq!(1, records.len());
    assert_eq!(body["reference"], records[0].id.as_str());
    assert_eq!("pano123", records[0].panorama_id.as_str());
    assert_eq!("/9j/4A==", records[0].image_base64);
    assert_eq!(1, gws.metadata_calls());
    assert_eq!(1, gws.image_calls());
}

#[test]
fn each_discovery_creates_a_new_record() {
    let gws = TestGateways::with_panorama("pano123");
    let client = setup(valid_cfg(), &gws);
    let first = json_body(client.get("/api/random-location").dispatch());
    let second = json_body(client.get("/api/random-location").dispatch());
    assert_ne!(first["reference"], second["reference"]);
    assert_eq!(2, gws.db.panoramas.lock().unwrap().len());
}

#[test]
fn no_coverage_found() {
    let gws = TestGateways::without_coverage();
    let cfg = Cfg {
        max_attempts: 3,
        ..valid_cfg()
    };
    let client = setup(cfg, &gws);
    let res = client.get("/api/random-location").dispatch();
    assert_eq!(res.status(), Status::InternalServerError);
    let body = json_body(res);
    assert_eq!(body["status"], "error");
    assert_eq!(
        body["message"],
        "Could not find a valid location with panorama available after 3 attempts"
    );
    assert_eq!(3, gws.metadata_calls());
    assert_eq!(0, gws.image_calls());
    assert!(gws.db.panoramas.lock().unwrap().is_empty());
}

#[test]
fn store_unavailable() {
    let db = DummyDb {
        unavailable: true,
        ..Default::default()
    };
    let gws = TestGateways::new(Some("pano123"), db);
    let client = setup(valid_cfg(), &gws);
    let res = client.get("/api/random-location").dispatch();
    assert_eq!(res.status(), Status::InternalServerError);
    test_json(&res);
    let body = json_body(res);
    assert_eq!(body["status"], "error");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("connection refused"));
}

#[test]
fn get_server_version() {
    let gws = TestGateways::without_coverage();
    let client = setup(valid_cfg(), &gws);
    let res = client.get("/api/server/version").dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert_eq!(res.into_string().unwrap(), DUMMY_VERSION);
}

#[test]
fn endpoints_are_documented() {
    let endpoints = endpoints();
    assert_eq!(2, endpoints.len());
    assert!(endpoints.contains_key("/api/random-location"));
    assert!(endpoints.contains_key("/health"));
}
