//! Contract checks for the request gateway's pure seams: URL joining, body
//! decoding, and error-body normalization, exercised with the payload shapes
//! the Medicheck API actually returns.

use medicheck_web::app_lib::{
    AppError,
    api::{api_error, decode_json, join_url},
};
use medicheck_web::features::{
    auth::types::{AuthResponse, Role},
    notes::types::NotesResponse,
    records::types::PatientRecords,
    symptoms::types::SymptomAnalysis,
};

#[test]
fn join_url_normalizes_slashes_between_base_and_path() {
    assert_eq!(
        join_url("http://localhost:8000", "/auth/login"),
        "http://localhost:8000/auth/login"
    );
    assert_eq!(
        join_url("http://localhost:8000/", "auth/login"),
        "http://localhost:8000/auth/login"
    );
    assert_eq!(
        join_url("https://api.medicheck.dev///", "/notes"),
        "https://api.medicheck.dev/notes"
    );
    // Relative deployments keep the path as-is.
    assert_eq!(join_url("", "/notes"), "/notes");
}

#[test]
fn login_response_decodes_with_lowercase_role() {
    let decoded: AuthResponse = decode_json(
        r#"{"access_token":"tok-1","token_type":"bearer","role":"patient"}"#,
    )
    .expect("login body should decode");

    assert_eq!(decoded.access_token, "tok-1");
    assert_eq!(decoded.role, Role::Patient);
}

#[test]
fn notes_listing_decodes_without_optional_timestamps() {
    let decoded: NotesResponse = decode_json(
        r#"{"items":[{"id":"n1","text":"BP check"},{"id":"n2","text":"Refill","created_at":"2026-03-01T10:00:00Z"}]}"#,
    )
    .expect("notes listing should decode");

    assert_eq!(decoded.items.len(), 2);
    assert!(decoded.items[0].created_at.is_none());
    assert_eq!(decoded.items[1].text, "Refill");
}

#[test]
fn records_bundle_keeps_sections_opaque() {
    let decoded: PatientRecords = decode_json(
        r#"{"medical_history":[{"condition":"Asthma"}],
            "medications":[{"name":"Salbutamol","dose":"100mcg"}],
            "test_results":[{"test_name":"CBC","collected_at":"2026-01-12"}]}"#,
    )
    .expect("records bundle should decode");

    assert_eq!(
        decoded.medical_history[0]["condition"],
        serde_json::json!("Asthma")
    );
    assert!(decoded.test_results.as_array().is_some());
}

#[test]
fn symptom_analysis_decodes_full_payload() {
    let decoded: SymptomAnalysis = decode_json(
        r#"{"session_id":"s-9","urgency":"URGENT",
            "insights":[{"condition":"Migraine","confidence":"Medium"}],
            "recommended_tests":[{"test":"CT scan","reason":"Rule out acute causes."}],
            "safety_statement":"This output provides assistive clinical guidance only."}"#,
    )
    .expect("analysis should decode");

    assert_eq!(decoded.urgency, "URGENT");
    assert_eq!(decoded.insights.len(), 1);
    assert!(decoded.safety_statement.starts_with("This output"));
}

#[test]
fn decode_rejects_shape_mismatch() {
    let result: Result<NotesResponse, AppError> = decode_json(r#"{"notes":[]}"#);

    assert!(matches!(result, Err(AppError::Parse(_))));
}

#[test]
fn api_error_prefers_server_message_field() {
    let err = api_error(401, r#"{"message":"invalid token"}"#);

    assert_eq!(err.status(), Some(401));
    assert_eq!(err.message(), "invalid token");
    assert_eq!(err.to_string(), "Request failed (401): invalid token");
}

#[test]
fn api_error_reads_fastapi_detail_field() {
    let err = api_error(403, r#"{"detail":"No patient consent."}"#);

    assert_eq!(err.message(), "No patient consent.");
    assert_eq!(err.status(), Some(403));
}

#[test]
fn api_error_falls_back_when_detail_is_structured() {
    // FastAPI validation errors carry a list under "detail"; the generic
    // message is shown but the body is preserved for callers.
    let err = api_error(
        422,
        r#"{"detail":[{"loc":["body","severity"],"msg":"ensure this value is less than or equal to 10"}]}"#,
    );

    assert_eq!(err.message(), "Request failed.");
    match err {
        AppError::Api { body: Some(body), .. } => {
            assert!(body["detail"].is_array());
        }
        other => panic!("expected Api error with body, got {other:?}"),
    }
}

#[test]
fn api_error_tolerates_non_json_bodies() {
    let err = api_error(502, "<html>Bad Gateway</html>");

    assert_eq!(err.message(), "Request failed.");
    match err {
        AppError::Api { body, status, .. } => {
            assert_eq!(status, 502);
            assert!(body.is_none());
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
