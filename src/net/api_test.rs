use super::*;

#[test]
fn send_failed_reason_names_endpoint() {
    assert_eq!(
        send_failed_reason("/predict", "NetworkError"),
        "request to /predict failed: NetworkError"
    );
}

#[test]
fn read_failed_reason_formats_status() {
    assert_eq!(
        read_failed_reason(500, "body used"),
        "reading response body (500) failed: body used"
    );
}
