use super::*;

// =============================================================
// PredictResponse serde
// =============================================================

#[test]
fn response_with_prediction_deserializes() {
    let resp: PredictResponse = serde_json::from_str(r#"{"prediction":"cat"}"#).unwrap();
    assert_eq!(resp.prediction.as_deref(), Some("cat"));
    assert_eq!(resp.error, None);
}

#[test]
fn response_serializes_only_present_fields() {
    let resp = PredictResponse {
        prediction: None,
        error: Some("No file part".to_owned()),
    };
    assert_eq!(serde_json::to_string(&resp).unwrap(), r#"{"error":"No file part"}"#);
}

#[test]
fn response_ignores_unknown_fields() {
    let resp: PredictResponse =
        serde_json::from_str(r#"{"prediction":"Tomato___healthy","confidence":0.93}"#).unwrap();
    assert_eq!(resp.prediction.as_deref(), Some("Tomato___healthy"));
}

// =============================================================
// is_success
// =============================================================

#[test]
fn is_success_covers_2xx_only() {
    assert!(is_success(200));
    assert!(is_success(204));
    assert!(!is_success(199));
    assert!(!is_success(300));
    assert!(!is_success(400));
    assert!(!is_success(500));
}

// =============================================================
// from_response
// =============================================================

#[test]
fn success_with_prediction_is_label() {
    let outcome = PredictOutcome::from_response(200, r#"{"prediction":"cat"}"#);
    assert_eq!(outcome, PredictOutcome::Label("cat".to_owned()));
    assert_eq!(outcome.display_text(), "CAT");
}

#[test]
fn error_status_uses_error_message() {
    let outcome = PredictOutcome::from_response(400, r#"{"error":"bad image"}"#);
    assert_eq!(
        outcome,
        PredictOutcome::Rejected {
            status: 400,
            message: "bad image".to_owned()
        }
    );
    assert_eq!(outcome.display_text(), "ERROR: bad image");
}

#[test]
fn error_status_without_message_uses_fallback() {
    let outcome = PredictOutcome::from_response(500, "{}");
    assert_eq!(outcome.display_text(), "ERROR: Unknown error");
}

#[test]
fn success_without_prediction_is_transport_failure() {
    let outcome = PredictOutcome::from_response(200, r#"{"error":"odd"}"#);
    assert!(matches!(outcome, PredictOutcome::TransportFailed { .. }));
    assert_eq!(outcome.display_text(), "SYSTEM ERROR: CONNECTION FAILED");
}

#[test]
fn non_json_body_is_transport_failure() {
    let outcome = PredictOutcome::from_response(502, "<html>Bad Gateway</html>");
    let PredictOutcome::TransportFailed { reason } = &outcome else {
        panic!("expected transport failure, got {outcome:?}");
    };
    assert!(reason.contains("502"));
    assert_eq!(outcome.display_text(), "SYSTEM ERROR: CONNECTION FAILED");
}

#[test]
fn transport_constructor_displays_system_error() {
    let outcome = PredictOutcome::transport("network unreachable");
    assert_eq!(
        outcome,
        PredictOutcome::TransportFailed {
            reason: "network unreachable".to_owned()
        }
    );
    assert_eq!(outcome.display_text(), "SYSTEM ERROR: CONNECTION FAILED");
}
